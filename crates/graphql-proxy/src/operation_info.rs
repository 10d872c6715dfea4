use graphql_astparser::ast::OperationType;
use graphql_astparser::Document;
use graphql_astparser::Input;
use graphql_astparser::Position;

/// What a proxy needs to know about one operation to route it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct OperationInfo {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub position: Position,
}

/// Lists the operations of `document` in source order. Fragments and type
/// system definitions are skipped.
pub fn inspect_operations(input: &Input, document: &Document) -> Vec<OperationInfo> {
    document
        .operations()
        .map(|operation| OperationInfo {
            operation_type: operation.operation_type,
            name: operation
                .name
                .map(|name| input.byte_slice_string(name).into_owned()),
            position: operation.position,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspect(source: &str) -> Vec<OperationInfo> {
        let input = Input::from(source);
        let mut document = Document::new();
        if let Err(error) = graphql_astparser::parse(&input, &mut document) {
            panic!("Expected successful parse, got: {error}");
        }
        inspect_operations(&input, &document)
    }

    #[test]
    fn lists_operations_in_source_order() {
        let operations = inspect(
            "fragment F on User { id }
             mutation Like { like { id } }
             type User { id: ID }
             { me { ...F } }",
        );
        assert_eq!(
            operations,
            vec![
                OperationInfo {
                    operation_type: OperationType::Mutation,
                    name: Some("Like".to_string()),
                    position: Position::new(2, 14, 39),
                },
                OperationInfo {
                    operation_type: OperationType::Query,
                    name: None,
                    position: Position::new(4, 14, 116),
                },
            ],
        );
    }

    #[test]
    fn schema_documents_have_no_operations() {
        assert!(inspect("type Query { a: Int } schema { query: Query }").is_empty());
    }

    #[test]
    fn serializes_for_tooling() {
        let operations = inspect("subscription OnEvent { event }");
        let json = serde_json::to_value(&operations).unwrap();
        assert_eq!(json[0]["operation_type"], "Subscription");
        assert_eq!(json[0]["name"], "OnEvent");
    }
}
