use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 來源表格中的一列，欄位一律保留為未轉型的文字
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub code: String,
    pub level: String,
    pub title: String,
    pub short_title: String,
    pub remarks: String,
    pub inclusions: String,
    pub also_covers: String,
    pub exclusions: String,
    pub extras: Vec<String>,
}

/// 成功解析後的表格與偵測到的格式資訊
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub rows: Vec<TableRow>,
    pub encoding: String,
    pub delimiter: char,
    pub columns: Vec<String>,
}

/// 分類體系中的一個概念，以分類代碼為唯一鍵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub id: String,
    pub level: u8,
    pub title: String,
    pub short_title: String,
    pub definition: String,
    pub note: String,
    pub parent: Option<String>,
    pub children: BTreeSet<String>,
}

/// 概念森林：概念表加上父代碼到子代碼的鄰接表
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    pub concepts: BTreeMap<String, Concept>,
    pub children_of: BTreeMap<String, Vec<String>>,
}

impl Hierarchy {
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// 第一層概念，依代碼遞增排序
    pub fn top_concepts(&self) -> Vec<&Concept> {
        self.at_level(1)
    }

    pub fn at_level(&self, level: u8) -> Vec<&Concept> {
        self.concepts
            .values()
            .filter(|c| c.level == level)
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        let mut level_counts = [0usize; 4];
        let mut with_definition = 0;
        let mut with_note = 0;

        for concept in self.concepts.values() {
            if (1..=4).contains(&concept.level) {
                level_counts[concept.level as usize - 1] += 1;
            }
            if !concept.definition.is_empty() {
                with_definition += 1;
            }
            if !concept.note.is_empty() {
                with_note += 1;
            }
        }

        let top_concepts = self
            .top_concepts()
            .into_iter()
            .map(|c| TopConcept {
                id: c.id.clone(),
                title: c.title.clone(),
            })
            .collect();

        Statistics {
            level_counts,
            with_definition,
            with_note,
            total: self.concepts.len(),
            top_concepts,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopConcept {
    pub id: String,
    pub title: String,
}

/// 建構完成後的統計摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub level_counts: [usize; 4],
    pub with_definition: usize,
    pub with_note: usize,
    pub total: usize,
    pub top_concepts: Vec<TopConcept>,
}

/// load 階段的結果
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub output_path: String,
    pub concepts_written: usize,
    pub generated: NaiveDate,
}

/// 一次完整執行的彙總，可經由 --report 輸出為 JSON
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub concepts_built: usize,
    pub concepts_written: usize,
    pub output_path: String,
    pub generated: NaiveDate,
    pub statistics: Statistics,
}
