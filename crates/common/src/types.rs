/// Width SAP uses for customer (KUNNR) and vendor (LIFNR) numbers.
pub const ID_WIDTH: usize = 10;

/// Padding policy applied to an inbound identifier before it is sent to SAP.
///
/// Routes disagree on whether SAP expects a zero-padded key, so the policy is
/// chosen per route rather than globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Trim only; the identifier is sent as the caller typed it.
    #[default]
    None,
    /// Trim, then left-pad with `'0'` up to the given width.
    Width(usize),
}

impl Padding {
    /// The standard 10-digit KUNNR/LIFNR padding.
    pub const SAP_KEY: Padding = Padding::Width(ID_WIDTH);
}

/// Trims `raw` and applies `padding`.
///
/// Identifiers already at or above the target width are passed through
/// unchanged; oversize input is never truncated or rejected.
pub fn normalize_id(raw: &str, padding: Padding) -> String {
    let trimmed = raw.trim();
    match padding {
        Padding::None => trimmed.to_string(),
        Padding::Width(width) => format!("{trimmed:0>width$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids_pad_to_exact_width() {
        for raw in ["5", "42", "200000", "123456789"] {
            let id = normalize_id(raw, Padding::SAP_KEY);
            assert_eq!(id.len(), ID_WIDTH, "{raw} padded to {id}");
            assert!(id.ends_with(raw));
        }
        assert_eq!(normalize_id("5", Padding::SAP_KEY), "0000000005");
    }

    #[test]
    fn ids_at_or_above_width_pass_through() {
        assert_eq!(normalize_id("0000200000", Padding::SAP_KEY), "0000200000");
        assert_eq!(normalize_id("123456789012", Padding::SAP_KEY), "123456789012");
    }

    #[test]
    fn whitespace_is_trimmed_before_padding() {
        assert_eq!(normalize_id("  17 ", Padding::SAP_KEY), "0000000017");
        assert_eq!(normalize_id("  17 ", Padding::None), "17");
    }

    #[test]
    fn unpadded_policy_keeps_short_ids() {
        assert_eq!(normalize_id("200000", Padding::None), "200000");
        assert_eq!(normalize_id("200000", Padding::default()), "200000");
    }

    #[test]
    fn empty_input_stays_empty_without_padding() {
        assert!(normalize_id("   ", Padding::None).is_empty());
    }
}
