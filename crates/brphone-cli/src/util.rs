use std::cmp::Ordering;

pub fn ordering_value(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

pub fn validity_label(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "invalid"
    }
}

pub fn equality_label(equal: bool) -> &'static str {
    if equal {
        "equal"
    } else {
        "different"
    }
}
