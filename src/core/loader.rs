use crate::domain::model::{LoadedTable, TableRow};
use crate::utils::error::{ConvertError, Result};

/// 表格至少要有的欄位數，低於此值視為解析失敗
const MIN_COLUMNS: usize = 8;

/// 前八欄的語意名稱，依位置指派，不理會來源標頭文字
const SEMANTIC_COLUMNS: [&str; 8] = [
    "code",
    "level",
    "title",
    "short_title",
    "remarks",
    "inclusions",
    "also_covers",
    "exclusions",
];

/// 候選編碼，依固定優先順序嘗試
const ENCODINGS: [TextEncoding; 5] = [
    TextEncoding::Utf8,
    TextEncoding::Utf8Sig,
    TextEncoding::Windows1252,
    TextEncoding::Latin1,
    TextEncoding::Iso8859_1,
];

/// 候選分隔符，依固定優先順序嘗試
const DELIMITERS: [u8; 3] = [b';', b',', b'\t'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Sig,
    Windows1252,
    Latin1,
    Iso8859_1,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Windows1252 => "windows-1252",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    /// 將原始位元組解碼為文字，無法解碼時回傳 None
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Utf8Sig => {
                let stripped = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                std::str::from_utf8(stripped).ok().map(str::to_owned)
            }
            TextEncoding::Windows1252 => {
                let (text, had_errors) =
                    encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
            // 單位元組編碼直接以 1:1 對應 Unicode 前 256 個碼位
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => {
                Some(bytes.iter().map(|&b| b as char).collect())
            }
        }
    }
}

/// 以固定的編碼×分隔符候選清單讀入表格，第一個通過欄位數檢查的組合勝出
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLoader;

impl TableLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, bytes: &[u8]) -> Result<LoadedTable> {
        let mut attempts = 0;

        for encoding in ENCODINGS {
            let Some(text) = encoding.decode(bytes) else {
                tracing::debug!("Decoding as {} failed", encoding.label());
                attempts += DELIMITERS.len();
                continue;
            };

            for delimiter in DELIMITERS {
                attempts += 1;

                if let Some((rows, columns)) = self.try_parse(&text, delimiter) {
                    tracing::info!(
                        "✅ Table parsed with encoding {} and delimiter {:?} ({} columns, {} rows)",
                        encoding.label(),
                        delimiter as char,
                        columns.len(),
                        rows.len()
                    );
                    return Ok(LoadedTable {
                        rows,
                        encoding: encoding.label().to_string(),
                        delimiter: delimiter as char,
                        columns,
                    });
                }

                tracing::debug!(
                    "Encoding {} with delimiter {:?} rejected",
                    encoding.label(),
                    delimiter as char
                );
            }
        }

        Err(ConvertError::TableFormatError { attempts })
    }

    /// 單一候選組合的完整解析；欄位數不足或任何記錄出錯即否決該組合
    fn try_parse(&self, text: &str, delimiter: u8) -> Option<(Vec<TableRow>, Vec<String>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let header_len = reader.headers().ok()?.len();
        if header_len < MIN_COLUMNS {
            return None;
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(Self::row_from_record(&record.ok()?));
        }

        let mut columns: Vec<String> = SEMANTIC_COLUMNS.iter().map(|s| s.to_string()).collect();
        for i in MIN_COLUMNS..header_len {
            columns.push(format!("extra_{}", i - MIN_COLUMNS + 1));
        }

        Some((rows, columns))
    }

    fn row_from_record(record: &csv::StringRecord) -> TableRow {
        let field = |i: usize| record.get(i).unwrap_or("").to_string();

        TableRow {
            code: field(0),
            level: field(1),
            title: field(2),
            short_title: field(3),
            remarks: field(4),
            inclusions: field(5),
            also_covers: field(6),
            exclusions: field(7),
            extras: (MIN_COLUMNS..record.len()).map(field).collect(),
        }
    }
}
