use crate::collection::Item;
use crate::error::Result;
use serde_json::Value;

/// Replace the child items of the first top-level entry named `label` in a
/// foreign collection document.
///
/// The document is handled as untyped JSON so fields the generator knows
/// nothing about (auth blocks, variables, ids) survive the merge byte for
/// byte. Returns `true` if the placeholder was found and its children were
/// replaced wholesale, `false` if no entry matches, in which case the
/// document is left untouched.
pub fn replace_placeholder_items(doc: &mut Value, label: &str, items: &[Item]) -> Result<bool> {
    let replacement = serde_json::to_value(items)?;

    let Some(top) = doc.get_mut("item").and_then(Value::as_array_mut) else {
        return Ok(false);
    };
    for entry in top {
        if entry.get("name").and_then(Value::as_str) != Some(label) {
            continue;
        }
        if let Some(obj) = entry.as_object_mut() {
            obj.insert("item".to_string(), replacement);
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str) -> Item {
        Item {
            name: name.to_string(),
            request: None,
            event: Vec::new(),
            item: None,
        }
    }

    #[test]
    fn replaces_children_of_matching_item() {
        let mut doc = json!({
            "info": { "name": "suite" },
            "item": [
                { "name": "Step 1: Login" },
                { "name": "Step 3", "item": [ { "name": "stale" } ] }
            ]
        });
        let replaced =
            replace_placeholder_items(&mut doc, "Step 3", &[record("fresh-1"), record("fresh-2")])
                .unwrap();
        assert!(replaced);
        assert_eq!(doc["item"][1]["item"].as_array().unwrap().len(), 2);
        assert_eq!(doc["item"][1]["item"][0]["name"], "fresh-1");
        // Siblings and unrelated fields are untouched
        assert_eq!(doc["item"][0]["name"], "Step 1: Login");
        assert_eq!(doc["info"]["name"], "suite");
    }

    #[test]
    fn only_first_match_is_replaced() {
        let mut doc = json!({
            "item": [
                { "name": "dup", "item": [] },
                { "name": "dup", "item": [ { "name": "keep" } ] }
            ]
        });
        replace_placeholder_items(&mut doc, "dup", &[record("new")]).unwrap();
        assert_eq!(doc["item"][0]["item"][0]["name"], "new");
        assert_eq!(doc["item"][1]["item"][0]["name"], "keep");
    }

    #[test]
    fn missing_label_leaves_document_unchanged() {
        let mut doc = json!({
            "item": [ { "name": "something else", "item": [ { "name": "keep" } ] } ]
        });
        let before = doc.clone();
        let replaced = replace_placeholder_items(&mut doc, "Step 3", &[record("new")]).unwrap();
        assert!(!replaced);
        assert_eq!(doc, before);
    }

    #[test]
    fn document_without_item_array_is_left_alone() {
        let mut doc = json!({ "info": { "name": "empty" } });
        let before = doc.clone();
        let replaced = replace_placeholder_items(&mut doc, "Step 3", &[]).unwrap();
        assert!(!replaced);
        assert_eq!(doc, before);
    }

    #[test]
    fn placeholder_gains_item_array_if_it_had_none() {
        let mut doc = json!({ "item": [ { "name": "Step 3" } ] });
        let replaced = replace_placeholder_items(&mut doc, "Step 3", &[record("new")]).unwrap();
        assert!(replaced);
        assert_eq!(doc["item"][0]["item"][0]["name"], "new");
    }
}
