// SPDX: CC0-1.0

use crate::Number;
use std::collections::BTreeMap;

pub type Curve = fn(Number) -> Number;

pub type Curves = BTreeMap<&'static str, Curve>;

pub fn standard_curves() -> Curves {
    let mut ret: Curves = BTreeMap::new();

    ret.insert("identity", |x| x);
    ret.insert("square", |x| x * x);
    ret.insert("cube", |x| x * x * x);
    ret.insert("recip", |x| 1.0 / x);
    ret.insert("abs", Number::abs);
    ret.insert("sqrt", Number::sqrt);
    ret.insert("exp", Number::exp);
    ret.insert("ln", Number::ln);
    ret.insert("log10", Number::log10);

    // trig
    ret.insert("sin", Number::sin);
    ret.insert("cos", Number::cos);
    ret.insert("tan", Number::tan);
    ret.insert("asin", Number::asin);
    ret.insert("acos", Number::acos);
    ret.insert("atan", Number::atan);
    ret.insert("sinc", |x| if x == 0.0 { 1.0 } else { x.sin() / x });
    ret
}

/// The known name most similar to `name`, if any is similar enough to be
/// worth suggesting.
pub fn suggest<'a>(name: &str, known: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let name = name.to_ascii_lowercase();
    known
        .into_iter()
        .map(|k| {
            (
                strsim::normalized_damerau_levenshtein(&name, &k.to_ascii_lowercase()),
                k,
            )
        })
        .reduce(|(acc_sim, acc), (sim, k)| if sim > acc_sim { (sim, k) } else { (acc_sim, acc) })
        .filter(|(sim, _)| *sim > 0.3)
        .map(|(_, k)| k)
}
