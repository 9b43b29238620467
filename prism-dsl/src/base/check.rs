use super::{Aggregation, Element, Family, Node, Query, Script};
use crate::error::{Error, Result};

/// Verify that `value` is a node of the `expected` family.
///
/// Any variant of the family is accepted: a stored script satisfies
/// `Family::Script` as well as an inline one. Scalars never match.
pub fn check_type(value: &Element, expected: Family) -> Result<()> {
    match value {
        Element::Node(node) if node.family() == expected => Ok(()),
        other => Err(mismatch(expected, other)),
    }
}

fn mismatch(expected: Family, value: &Element) -> Error {
    let actual = value.describe();
    tracing::debug!("Rejected {} where a {} node is required", actual, expected);
    Error::TypeMismatch { expected, actual }
}

pub(crate) fn expect_script(value: Element) -> Result<Script> {
    check_type(&value, Family::Script)?;
    match value {
        Element::Node(Node::Script(script)) => Ok(script),
        other => Err(mismatch(Family::Script, &other)),
    }
}

pub(crate) fn expect_query(value: Element) -> Result<Query> {
    check_type(&value, Family::Query)?;
    match value {
        Element::Node(Node::Query(query)) => Ok(query),
        other => Err(mismatch(Family::Query, &other)),
    }
}

pub(crate) fn expect_aggregation(value: Element) -> Result<Aggregation> {
    check_type(&value, Family::Aggregation)?;
    match value {
        Element::Node(Node::Aggregation(agg)) => Ok(agg),
        other => Err(mismatch(Family::Aggregation, &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BodyValue;
    use serde_json::json;

    #[test]
    fn test_accepts_any_variant_of_family() {
        assert!(check_type(&Script::inline("doc.price.value").into(), Family::Script).is_ok());
        assert!(check_type(&Script::stored("calc").into(), Family::Script).is_ok());
    }

    #[test]
    fn test_rejects_scalar() {
        let err = check_type(&Element::from("doc.price.value"), Family::Script).unwrap_err();
        match err {
            Error::TypeMismatch { expected, actual } => {
                assert_eq!(expected, Family::Script);
                assert_eq!(actual, "string");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_other_family() {
        let err = check_type(&Query::new("match_all").into(), Family::Aggregation).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected aggregation node, got query node"
        );
    }

    #[test]
    fn test_expect_returns_node() {
        let script = expect_script(Script::inline("1 + 1").into()).unwrap();
        assert_eq!(
            script.body().get("source"),
            Some(&BodyValue::Scalar(json!("1 + 1")))
        );
        assert!(expect_query(Element::from(json!({"term": {}}))).is_err());
        assert!(expect_aggregation(Aggregation::new("n", "global").into()).is_ok());
    }
}
