use crate::utils::error::{DrillError, Result};
use serde_json::Value;

/// 依序以 `path` 中的 key 走訪巢狀 JSON 物件。
///
/// 任一層缺少 key（或該層根本不是物件）時回傳 `MissingKey`，其中帶著第一個失敗的 key。
/// 空路徑回傳 `map` 本身。
pub fn access_nested_map<'a, K: AsRef<str>>(map: &'a Value, path: &[K]) -> Result<&'a Value> {
    let mut current = map;
    for key in path {
        let key = key.as_ref();
        current = current
            .as_object()
            .and_then(|object| object.get(key))
            .ok_or_else(|| DrillError::missing_key(key))?;
    }
    Ok(current)
}

/// 以點號分隔的路徑，例如 `"license.key"`。
pub fn access_dotted<'a>(map: &'a Value, dotted_path: &str) -> Result<&'a Value> {
    if dotted_path.is_empty() {
        return Ok(map);
    }
    let keys: Vec<&str> = dotted_path.split('.').collect();
    access_nested_map(map, &keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_nested_map() {
        let cases = [
            (json!({"a": 1}), vec!["a"], json!(1)),
            (json!({"a": {"b": 2}}), vec!["a"], json!({"b": 2})),
            (json!({"a": {"b": 2}}), vec!["a", "b"], json!(2)),
        ];

        for (nested_map, path, expected) in cases {
            assert_eq!(access_nested_map(&nested_map, &path).unwrap(), &expected);
        }
    }

    #[test]
    fn test_access_nested_map_exception() {
        let cases = [
            (json!({}), vec!["a"]),
            (json!({"a": 1}), vec!["a", "b"]),
        ];

        for (nested_map, path) in cases {
            let err = access_nested_map(&nested_map, &path).unwrap_err();
            assert!(matches!(err, DrillError::MissingKey { .. }));
            assert_eq!(err.to_string(), *path.last().unwrap());
        }
    }

    #[test]
    fn test_reports_first_missing_key() {
        let nested_map = json!({"a": {"b": {"c": 3}}});
        let err = access_nested_map(&nested_map, &["a", "x", "c"]).unwrap_err();
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn test_empty_path_returns_root() {
        let nested_map = json!({"a": 1});
        let empty: [&str; 0] = [];
        assert_eq!(access_nested_map(&nested_map, &empty).unwrap(), &nested_map);
        assert_eq!(access_dotted(&nested_map, "").unwrap(), &nested_map);
    }

    #[test]
    fn test_arrays_are_not_mappings() {
        let nested_map = json!({"a": [1, 2]});
        assert!(access_nested_map(&nested_map, &["a", "0"]).is_err());
    }

    #[test]
    fn test_access_dotted() {
        let repo = json!({"license": {"key": "mit"}});
        assert_eq!(access_dotted(&repo, "license.key").unwrap(), &json!("mit"));
        assert!(access_dotted(&repo, "license.name").is_err());
    }
}
