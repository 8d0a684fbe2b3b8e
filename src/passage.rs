use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;

use crate::error::TyperError;

static PASSAGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/passages");

const PASSAGE_FILE: &str = "passages.json";

/// Used when the embedded passage list is unusable
pub const FALLBACK_PASSAGE: &str = "The quick brown fox jumps over the lazy dog.";

#[derive(Deserialize, Clone, Debug)]
struct PassageSet {
    passages: Vec<String>,
}

/// Every built-in passage, in file order
pub fn builtin() -> Result<Vec<String>, TyperError> {
    let file = PASSAGE_DIR
        .get_file(PASSAGE_FILE)
        .ok_or_else(|| TyperError::PassageData(format!("{PASSAGE_FILE} not embedded")))?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| TyperError::PassageData(format!("{PASSAGE_FILE} is not UTF-8")))?;

    parse(contents)
}

fn parse(json: &str) -> Result<Vec<String>, TyperError> {
    let set: PassageSet = serde_json::from_str(json)?;
    let passages: Vec<String> = set
        .passages
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();

    if passages.is_empty() {
        return Err(TyperError::PassageData("no passages defined".into()));
    }
    Ok(passages)
}

/// Picks a built-in passage at random
pub fn random() -> Result<String, TyperError> {
    let passages = builtin()?;
    passages
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| TyperError::PassageData("no passages defined".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passages_load() {
        let passages = builtin().unwrap();

        assert!(!passages.is_empty());
        for p in &passages {
            assert!(p.is_ascii(), "{p:?} should be plain ASCII");
            assert!(!p.contains('\n'));
        }
    }

    #[test]
    fn test_random_is_a_builtin() {
        let passages = builtin().unwrap();
        let picked = random().unwrap();
        assert!(passages.contains(&picked));
    }

    #[test]
    fn test_parse_skips_blank_entries() {
        let passages = parse(r#"{ "passages": ["  ", "one two"] }"#).unwrap();
        assert_eq!(passages, vec!["one two".to_string()]);
    }

    #[test]
    fn test_parse_rejects_empty_set() {
        assert!(matches!(
            parse(r#"{ "passages": [] }"#),
            Err(TyperError::PassageData(_))
        ));
        assert!(matches!(parse("[]"), Err(TyperError::Json(_))));
    }

    #[test]
    fn test_fallback_is_usable() {
        assert!(!FALLBACK_PASSAGE.trim().is_empty());
    }
}
