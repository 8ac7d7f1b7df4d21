//! Small utility functions used throughout the library.

/// Formats a number in scientific notation, right-aligned in a field of `width` characters
pub fn format_num(num: f64, width: usize) -> String {
    format!("{:>width$}", format!("{:.5e}", num), width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_num() {
        assert_eq!("1.50000e2", format_num(150.0, 6));
        assert_eq!("  1.50000e2", format_num(150.0, 11));
        assert_eq!(" -1.50000e2", format_num(-150.0, 11));
    }
}
