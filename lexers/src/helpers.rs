#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these functions is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

// scan numbers like -?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?
pub fn scan_number<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    let digits = "0123456789";
    // optional sign
    scanner.accept_any_char("+-");
    // require integer part
    if !scanner.skip_all_chars(digits) {
        scanner.set_pos(backtrack);
        return None;
    }
    // check for fractional part, else it's just an integer
    let backtrack = scanner.pos();
    if scanner.accept_any_char(".").is_some() && !scanner.skip_all_chars(digits) {
        scanner.set_pos(backtrack);
        return Some(scanner.extract_string()); // integer
    }
    // check for exponent part
    let backtrack = scanner.pos();
    if scanner.accept_any_char("eE").is_some() {
        scanner.accept_any_char("+-"); // exponent sign is optional
        if !scanner.skip_all_chars(digits) {
            scanner.set_pos(backtrack);
            return Some(scanner.extract_string()); // no exponent after all
        }
    }
    Some(scanner.extract_string())
}

// scan a single operator or paren, longest match first ('**' before '*')
pub fn scan_math_op<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    if scanner.accept_any_char("*").is_some() {
        // accept '*', '**'
        scanner.accept_any_char("*");
        Some(scanner.extract_string())
    } else if scanner.accept_any_char("+-/%^()").is_some() {
        Some(scanner.extract_string())
    } else {
        None
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_number() {
        let tests = vec![
            "987", "-543", "41.98", "-83.5",
            "28e3", "54E+2", "54e-33", "-38e3", "-53e+5", "-65E-4",
            "85.365e3", "54.234E+2", "54.849e-33", "-38.657e3", "65.987E-4",
        ];
        for t in tests.iter() {
            let mut s = Scanner::new(t.chars());
            assert_eq!(Some(t.to_string()), scan_number(&mut s));
        }
    }

    #[test]
    fn test_scan_number_partial() {
        // the fractional part needs digits, else only the integer is cut
        let mut s = Scanner::new("5.+3".chars());
        assert_eq!(Some("5".to_string()), scan_number(&mut s));
        // same for a dangling exponent marker
        let mut s = Scanner::new("3e 2".chars());
        assert_eq!(Some("3".to_string()), scan_number(&mut s));
        // a bare sign is not a number
        let mut s = Scanner::new("- 5".chars());
        assert_eq!(None, scan_number(&mut s));
    }

    #[test]
    fn test_scan_math_ops() {
        let tests = vec!["(", ")", "*", "**", "^", "+", "-", "/", "%"];
        for t in tests.iter() {
            let mut s = Scanner::new(t.chars());
            assert_eq!(Some(t.to_string()), scan_math_op(&mut s));
        }
        let mut s = Scanner::new("@".chars());
        assert_eq!(None, scan_math_op(&mut s));
    }
}
