//! Number formatting for table cells.

/// Fixed number of decimals, no grouping
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Fixed decimals with `,` thousands separators
pub fn grouped(value: f64, decimals: usize) -> String {
    let text = fixed(value.abs(), decimals);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value < 0.0 && text.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// BQ quantity cell: blank unless positive, one decimal otherwise
pub fn quantity_cell(quantity: f64) -> Option<String> {
    (quantity > 0.0).then(|| fixed(quantity, 1))
}

/// Cost cells always show two decimals
pub fn cost_cell(cost: f64) -> String {
    fixed(cost, 2)
}
