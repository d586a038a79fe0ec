#![deny(warnings)]

use crate::scanner::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // Advance the scanner only if the next char is in the 'any' set,
    // the matched char is returned
    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(next) {
                return Some(next);
            }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any_char(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Discard everything consumed so far plus any whitespace that
    // follows, reporting if whitespace was actually seen
    pub fn ignore_ws(&mut self) -> bool {
        let skipped = self.skip_all_chars(" \n\r\t");
        self.ignore();
        skipped
    }
}
