/// Quick bill parser tests
/// Free-text sale entry, e.g. "sale of 10 box at 3000 to Salim"

use rust_decimal_macros::dec;

use biller::quick_bill::parse_quick_bill;

#[test]
fn test_canonical_sentence() {
    let draft = parse_quick_bill("sale of 10 box at 3000 to Salim");

    assert_eq!(draft.items.len(), 1);
    let item = &draft.items[0];
    assert_eq!(item.description, "box");
    assert_eq!(item.quantity, 10);
    assert_eq!(item.price, dec!(3000));
    assert_eq!(draft.buyer_name.as_deref(), Some("Salim"));
}

#[test]
fn test_matching_ignores_case_but_keeps_names() {
    let draft = parse_quick_bill("SALE OF 2 Crates AT 15.50 TO Mary Jane");

    assert_eq!(draft.items[0].description, "Crates");
    assert_eq!(draft.items[0].price, dec!(15.50));
    assert_eq!(draft.buyer_name.as_deref(), Some("Mary Jane"));
}

#[test]
fn test_multi_word_description() {
    let draft = parse_quick_bill("sale of 4 red chairs @ 25 buyer Ali");

    assert_eq!(draft.items[0].description, "red chairs");
    assert_eq!(draft.items[0].quantity, 4);
    assert_eq!(draft.items[0].price, dec!(25));
    assert_eq!(draft.buyer_name.as_deref(), Some("Ali"));
}

#[test]
fn test_for_with_number_is_price_for_with_name_is_buyer() {
    let priced = parse_quick_bill("sale of 6 mugs for 12 to Omar");
    assert_eq!(priced.items[0].price, dec!(12));
    assert_eq!(priced.items[0].description, "mugs");
    assert_eq!(priced.buyer_name.as_deref(), Some("Omar"));

    let named = parse_quick_bill("sale of 6 mugs for Omar at 12");
    assert_eq!(named.items[0].price, dec!(12));
    assert_eq!(named.buyer_name.as_deref(), Some("Omar"));
}

#[test]
fn test_price_defaults_to_zero() {
    let draft = parse_quick_bill("12 bottles to Lina");

    assert_eq!(draft.items[0].price, dec!(0));
    assert_eq!(draft.items[0].description, "bottles");
    assert_eq!(draft.buyer_name.as_deref(), Some("Lina"));
}

#[test]
fn test_no_quantity_no_item() {
    let draft = parse_quick_bill("some boxes for Salim");

    assert!(draft.items.is_empty());
    assert_eq!(draft.buyer_name.as_deref(), Some("Salim"));
}

#[test]
fn test_no_buyer() {
    let draft = parse_quick_bill("3 at 9");

    assert_eq!(draft.items[0].description, "Item");
    assert_eq!(draft.buyer_name, None);
}
