use crate::domain::model::{Concept, Hierarchy};
use chrono::NaiveDate;

/// 序列化結果：完整文件內容與寫出的概念區塊數
#[derive(Debug, Clone)]
pub struct TtlDocument {
    pub text: String,
    pub concepts_written: usize,
}

/// 將概念森林渲染為確定性的 SKOS Turtle 文件。
/// 相同輸入加上固定日期必定產生位元組相同的輸出。
pub struct TurtleSerializer {
    title: String,
    description: String,
    base_uri: String,
    language: String,
    created: NaiveDate,
}

impl TurtleSerializer {
    pub fn new(
        title: &str,
        description: &str,
        base_uri: &str,
        language: &str,
        created: NaiveDate,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            base_uri: base_uri.to_string(),
            language: language.to_string(),
            created,
        }
    }

    pub fn render(&self, hierarchy: &Hierarchy) -> TtlDocument {
        let mut text = self.header(hierarchy);
        let mut concepts_written = 0;

        for level in 1..=4u8 {
            // BTreeMap 的迭代順序已是代碼遞增
            let at_level = hierarchy.at_level(level);
            if at_level.is_empty() {
                continue;
            }

            text.push_str(&format!("\n# Ebene {}\n", level));

            for concept in at_level {
                text.push_str(&self.concept_block(concept));
                text.push('\n');
                concepts_written += 1;
            }
        }

        TtlDocument {
            text,
            concepts_written,
        }
    }

    fn header(&self, hierarchy: &Hierarchy) -> String {
        let mut lines = vec![
            format!("@base <{}> .", self.base_uri),
            "@prefix skos: <http://www.w3.org/2004/02/skos/core#> .".to_string(),
            "@prefix dct: <http://purl.org/dc/terms/> .".to_string(),
            "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .".to_string(),
            String::new(),
            "<> a skos:ConceptScheme ;".to_string(),
            format!("\tdct:title \"{}\"@{} ;", self.title, self.language),
            format!(
                "\tdct:description \"{}\"@{} ;",
                self.description, self.language
            ),
        ];

        let created = self.created.format("%Y-%m-%d");
        let top_concepts = hierarchy.top_concepts();

        if top_concepts.is_empty() {
            // 沒有第一層概念時省略 hasTopConcept，標頭以 created 收尾
            lines.push(format!("\tdct:created \"{}\"^^xsd:date .", created));
        } else {
            lines.push(format!("\tdct:created \"{}\"^^xsd:date ;", created));
            let refs = top_concepts
                .iter()
                .map(|c| format!("<{}>", c.id))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("\tskos:hasTopConcept {} .", refs));
        }

        lines.join("\n") + "\n\n"
    }

    /// 單一概念區塊；每個敘述以 ` ;` 結尾，最後的 scheme 敘述以 ` .` 收尾
    fn concept_block(&self, concept: &Concept) -> String {
        let mut lines = vec![format!("<{}> a skos:Concept ;", concept.id)];

        if !concept.title.is_empty() {
            lines.push(format!(
                "\tskos:prefLabel \"{}\"@{} ;",
                concept.title, self.language
            ));
        }

        // Kurztitel nur als altLabel, wenn er sich vom Titel unterscheidet
        if !concept.short_title.is_empty() && concept.short_title != concept.title {
            lines.push(format!(
                "\tskos:altLabel \"{}\"@{} ;",
                concept.short_title, self.language
            ));
        }

        if !concept.definition.is_empty() {
            lines.push(format!(
                "\tskos:definition \"{}\"@{} ;",
                concept.definition, self.language
            ));
        }

        if !concept.note.is_empty() {
            lines.push(format!("\tskos:note \"{}\"@{} ;", concept.note, self.language));
        }

        if let Some(parent) = &concept.parent {
            lines.push(format!("\tskos:broader <{}> ;", parent));
        }

        if !concept.children.is_empty() {
            let refs = concept
                .children
                .iter()
                .map(|c| format!("<{}>", c))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("\tskos:narrower {} ;", refs));
        }

        if concept.level == 1 {
            lines.push("\tskos:topConceptOf <> .".to_string());
        } else {
            lines.push("\tskos:inScheme <> .".to_string());
        }

        lines.join("\n") + "\n"
    }
}
