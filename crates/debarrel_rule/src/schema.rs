use serde_json::{Value, json};

pub const RULE_NAME: &str = "debarrel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Problem,
    Suggestion,
    Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixable {
    Code,
    Whitespace,
}

#[derive(Debug, Clone, Copy)]
pub struct RuleMeta {
    pub name: &'static str,
    pub rule_type: RuleType,
    pub description: &'static str,
    pub recommended: bool,
    pub fixable: Option<Fixable>,
}

pub(crate) const META: RuleMeta = RuleMeta {
    name: RULE_NAME,
    rule_type: RuleType::Suggestion,
    description: "Transform barrel imports into direct imports",
    recommended: false,
    fixable: Some(Fixable::Code),
};

/// JSON schema of the rule options: a list holding exactly one options object.
///
/// Function-valued transforms cannot be expressed in JSON; the schema only
/// forbids strings for them, so a host can still pass callables through.
pub fn rule_schema() -> Value {
    json!([
        {
            "type": "object",
            "properties": {
                "patterns": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "barrel": { "type": "string" },
                            "transformPattern": { "type": "string" },
                            "transformImportName": {
                                "anyOf": [
                                    { "enum": ["lowercase", "kebab-case", "camelCase"] },
                                    { "not": { "type": "string" } }
                                ]
                            },
                            "namedExports": {
                                "type": "object",
                                "properties": {
                                    "suffixes": {
                                        "type": "array",
                                        "items": { "type": "string" }
                                    },
                                    "customPattern": { "type": "string" },
                                    "transformImportName": { "not": { "type": "string" } }
                                },
                                "required": ["suffixes"],
                                "additionalProperties": false
                            }
                        },
                        "required": ["barrel", "transformPattern"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["patterns"],
            "additionalProperties": false
        }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_single_options_object() {
        let schema = rule_schema();
        let items = schema.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["required"], json!(["patterns"]));
        assert_eq!(items[0]["additionalProperties"], json!(false));
    }

    #[test]
    fn test_schema_pattern_shape() {
        let schema = rule_schema();
        let pattern = &schema[0]["properties"]["patterns"]["items"];
        assert_eq!(pattern["required"], json!(["barrel", "transformPattern"]));
        assert_eq!(
            pattern["properties"]["transformImportName"]["anyOf"][0]["enum"],
            json!(["lowercase", "kebab-case", "camelCase"])
        );
        assert_eq!(pattern["properties"]["namedExports"]["required"], json!(["suffixes"]));
    }

    #[test]
    fn test_meta() {
        assert_eq!(META.name, "debarrel");
        assert_eq!(META.rule_type, RuleType::Suggestion);
        assert_eq!(META.fixable, Some(Fixable::Code));
        assert!(!META.recommended);
    }
}
