//! Parser for vocabulary sheets.
//!
//! # Format
//! ```markdown
//! # Nouns
//! AR: كتاب
//! BN: বই
//! PR: kitab
//! LV: easy
//!
//! # Verbs
//! AR: كتب
//! BN: লেখা
//! LV: medium
//! ```
//!
//! A heading starts a category, `AR:` starts an entry. `PR:` (pronunciation)
//! and `LV:` (level) are optional; an unrecognised level is kept as
//! [`Difficulty::Unknown`].

use crate::error::{ParseError, Result};
use crate::types::{Difficulty, VocabularyEntry};

/// Parse sheet content into entries, in file order.
pub fn parse(content: &str) -> Result<Vec<VocabularyEntry>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();

    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }

    parser.finalize()
}

/// Parse a JSON array of entries.
pub fn parse_json(content: &str) -> Result<Vec<VocabularyEntry>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }
    Ok(serde_json::from_str(content)?)
}

struct EntryBuilder {
    category: String,
    arabic: String,
    bengali: Option<String>,
    pronunciation: Option<String>,
    difficulty: Option<Difficulty>,
    start_line: usize,
}

impl EntryBuilder {
    fn build(self) -> Result<VocabularyEntry> {
        let bengali = self
            .bengali
            .filter(|text| !text.is_empty())
            .ok_or(ParseError::MissingBengali {
                line: self.start_line,
            })?;

        Ok(VocabularyEntry {
            arabic: self.arabic,
            bengali,
            pronunciation: self.pronunciation.filter(|text| !text.is_empty()),
            category: self.category,
            difficulty: self.difficulty.unwrap_or_default(),
        })
    }
}

struct Parser {
    category: Option<String>,
    current: Option<EntryBuilder>,
    entries: Vec<VocabularyEntry>,
}

impl Parser {
    fn new() -> Self {
        Self {
            category: None,
            current: None,
            entries: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Heading(name) => self.handle_heading(name, line_num),
            LineType::Arabic(text) => self.handle_arabic(text, line_num),
            LineType::Bengali(text) => {
                let entry = self.current_entry(line_num)?;
                Self::set_once(&mut entry.bengali, text, "BN", line_num)
            }
            LineType::Pronunciation(text) => {
                let entry = self.current_entry(line_num)?;
                Self::set_once(&mut entry.pronunciation, text, "PR", line_num)
            }
            LineType::Level(text) => {
                let entry = self.current_entry(line_num)?;
                if entry.difficulty.is_some() {
                    return Err(ParseError::DuplicateField {
                        field: "LV",
                        line: line_num,
                    });
                }
                entry.difficulty = Some(Difficulty::parse_lenient(text));
                Ok(())
            }
            LineType::Empty => Ok(()),
            LineType::Text(text) => Err(ParseError::UnexpectedLine {
                line: line_num,
                content: text.to_string(),
            }),
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix('#') {
            LineType::Heading(rest.trim_start_matches('#').trim())
        } else if let Some(rest) = trimmed.strip_prefix("AR:") {
            LineType::Arabic(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("BN:") {
            LineType::Bengali(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("PR:") {
            LineType::Pronunciation(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("LV:") {
            LineType::Level(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(trimmed)
        }
    }

    fn handle_heading(&mut self, name: &str, line_num: usize) -> Result<()> {
        self.flush_entry()?;
        if name.is_empty() {
            return Err(ParseError::MissingCategory { line: line_num });
        }
        self.category = Some(name.to_string());
        Ok(())
    }

    fn handle_arabic(&mut self, text: &str, line_num: usize) -> Result<()> {
        self.flush_entry()?;

        let category = self
            .category
            .clone()
            .ok_or(ParseError::MissingCategory { line: line_num })?;
        if text.is_empty() {
            return Err(ParseError::MissingArabic { line: line_num });
        }

        self.current = Some(EntryBuilder {
            category,
            arabic: text.to_string(),
            bengali: None,
            pronunciation: None,
            difficulty: None,
            start_line: line_num,
        });
        Ok(())
    }

    // Field lines only make sense after an `AR:` line.
    fn current_entry(&mut self, line_num: usize) -> Result<&mut EntryBuilder> {
        self.current
            .as_mut()
            .ok_or(ParseError::MissingArabic { line: line_num })
    }

    fn set_once(
        slot: &mut Option<String>,
        text: &str,
        field: &'static str,
        line_num: usize,
    ) -> Result<()> {
        if slot.is_some() {
            return Err(ParseError::DuplicateField {
                field,
                line: line_num,
            });
        }
        *slot = Some(text.to_string());
        Ok(())
    }

    fn flush_entry(&mut self) -> Result<()> {
        if let Some(builder) = self.current.take() {
            self.entries.push(builder.build()?);
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<VocabularyEntry>> {
        self.flush_entry()?;
        Ok(self.entries)
    }
}

enum LineType<'a> {
    Heading(&'a str),
    Arabic(&'a str),
    Bengali(&'a str),
    Pronunciation(&'a str),
    Level(&'a str),
    Text(&'a str),
    Empty,
}
