use crate::domain::model::{Concept, Hierarchy, TableRow};
use regex::Regex;
use std::collections::BTreeSet;

/// 文字欄位的正規化：展開固定的 HTML 實體、壓縮空白、
/// 跳脫反斜線與引號，最後去除前後空白
pub struct TextCleaner {
    whitespace: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn clean(&self, text: &str) -> String {
        let expanded = text
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">");

        let collapsed = self.whitespace.replace_all(&expanded, " ");

        // 反斜線要先跳脫，引號其次，否則引號的跳脫符會被再次跳脫
        let escaped = collapsed.replace('\\', "\\\\").replace('"', "\\\"");

        escaped.trim().to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// 由表格列建構概念森林：過濾層級 1 至 4、依代碼排序、
/// 以代碼前綴推導父概念
pub struct HierarchyBuilder {
    cleaner: TextCleaner,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self {
            cleaner: TextCleaner::new(),
        }
    }

    pub fn build(&self, rows: &[TableRow]) -> Hierarchy {
        let mut filtered: Vec<(&TableRow, u8)> = rows
            .iter()
            .filter_map(|row| {
                let level = row.level.trim().parse::<u8>().ok()?;
                if !(1..=4).contains(&level) {
                    return None;
                }
                if row.code.trim().is_empty() {
                    return None;
                }
                Some((row, level))
            })
            .collect();

        // 字典序而非數值序；穩定排序讓同代碼列維持輸入順序
        filtered.sort_by(|a, b| a.0.code.trim().cmp(b.0.code.trim()));

        let mut hierarchy = Hierarchy::default();

        for (row, level) in filtered {
            let code = row.code.trim().to_string();
            let concept = Concept {
                id: code.clone(),
                level,
                title: self.cleaner.clean(&row.title),
                short_title: self.cleaner.clean(&row.short_title),
                definition: self.cleaner.clean(&row.remarks),
                note: self.cleaner.clean(&row.inclusions),
                parent: None,
                children: BTreeSet::new(),
            };

            if hierarchy.concepts.insert(code.clone(), concept).is_some() {
                tracing::debug!("Concept {} replaced by a later row with the same code", code);
            }
        }

        self.link_children(&mut hierarchy);

        hierarchy
    }

    /// 將每個概念連到代碼前綴對應的父概念；父概念不存在時保持未連結
    fn link_children(&self, hierarchy: &mut Hierarchy) {
        let entries: Vec<(String, u8)> = hierarchy
            .concepts
            .values()
            .map(|c| (c.id.clone(), c.level))
            .collect();

        for (id, level) in entries {
            let Some(parent_id) = parent_code(&id, level) else {
                continue;
            };

            if !hierarchy.concepts.contains_key(&parent_id) {
                continue;
            }

            if let Some(parent) = hierarchy.concepts.get_mut(&parent_id) {
                parent.children.insert(id.clone());
            }
            if let Some(child) = hierarchy.concepts.get_mut(&id) {
                child.parent = Some(parent_id.clone());
            }

            hierarchy.children_of.entry(parent_id).or_default().push(id);
        }
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 父概念代碼 = 代碼的前 level-1 個字元；第一層或過短的代碼沒有父概念
fn parent_code(code: &str, level: u8) -> Option<String> {
    if level <= 1 {
        return None;
    }
    if code.chars().count() < level as usize {
        return None;
    }
    Some(code.chars().take(level as usize - 1).collect())
}
