use crate::QueryParams;

#[test]
fn given_pairs_when_collected_then_order_and_duplicates_are_kept() {
    let params: QueryParams = [("b", "2"), ("a", "1"), ("b", "3")].into_iter().collect();

    assert_eq!(params.len(), 3);
    assert_eq!(params.encode(), "b=2&a=1&b=3");
    assert_eq!(params.get("b"), Some("2"));
    assert_eq!(params.get("missing"), None);
}

#[test]
fn given_empty_params_when_encoded_then_empty_string() {
    let params = QueryParams::new();

    assert!(params.is_empty());
    assert_eq!(params.to_string(), "");
}

#[test]
fn given_reserved_characters_when_encoded_then_escaped() {
    let mut params = QueryParams::new();
    params.push("metadata[order]", "a&b=c");

    assert_eq!(params.encode(), "metadata%5Border%5D=a%26b%3Dc");
}
