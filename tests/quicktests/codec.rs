use bintree::format::Format;
use bintree::tree::Tree;
use quickcheck_macros::quickcheck;

const DECODABLE: [Format; 4] = [Format::KLP, Format::KPL, Format::LPK, Format::PLK];

#[quickcheck]
fn round_trip_i64(xs: Vec<i64>) -> bool {
    let tree: Tree<i64> = xs.into_iter().collect();
    DECODABLE.iter().all(|format| {
        let text = tree.save_to_string(format);
        Tree::from_str_with(&text, format).as_ref() == Ok(&tree)
    })
}

#[quickcheck]
fn round_trip_balanced_i16(xs: Vec<i16>) -> bool {
    let mut tree: Tree<i16> = xs.into_iter().collect();
    tree.balance();
    DECODABLE.iter().all(|format| {
        let text = tree.save_to_string(format);
        Tree::from_str_with(&text, format).as_ref() == Ok(&tree)
    })
}

#[quickcheck]
fn round_trip_f64(xs: Vec<f64>) -> bool {
    // NaN never equals itself, so leave it out of the equality check.
    let tree: Tree<f64> = xs.into_iter().filter(|x| !x.is_nan()).collect();
    let text = tree.save_to_string(&Format::KLP);
    Tree::from_str_with(&text, &Format::KLP).as_ref() == Ok(&tree)
}

#[quickcheck]
fn failed_load_keeps_tree(xs: Vec<i8>, garbage: String) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().collect();
    let before = tree.clone();
    match tree.load_from_str(&garbage, &Format::KLP) {
        Ok(()) => true,
        Err(_) => tree == before,
    }
}
