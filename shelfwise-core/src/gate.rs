//! Price-affordability gate shared by every genre.

use crate::book::Book;
use crate::criteria::Criteria;

/// Grade given to an affordable book before genre scoring.
pub const BASELINE_GRADE: f64 = 10.0;

/// Reject books above the budget (grade 0) or seed the baseline grade.
///
/// Returns true when genre-specific scoring may proceed.
pub fn gate(book: &mut Book, criteria: &Criteria) -> bool {
    if book.price() > criteria.max_price {
        book.set_grade(0.0);
        false
    } else {
        book.set_grade(BASELINE_GRADE);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::BookKind;

    fn book(price: f64) -> Book {
        Book::new("Blah blah", "Peter Jackson", price, 2000, "AAAA-1234", BookKind::Biography).unwrap()
    }

    #[test]
    fn test_affordable_gets_baseline() {
        let mut b = book(12.34);
        let c = Criteria { max_price: 25.0, ..Criteria::default() };
        assert!(gate(&mut b, &c));
        assert_eq!(b.grade(), 10);
    }

    #[test]
    fn test_too_expensive_gets_zero() {
        let mut b = book(12.34);
        let c = Criteria { max_price: 10.0, ..Criteria::default() };
        assert!(!gate(&mut b, &c));
        assert_eq!(b.grade(), 0);
    }

    #[test]
    fn test_price_equal_to_budget_passes() {
        let mut b = book(30.0);
        let c = Criteria { max_price: 30.0, ..Criteria::default() };
        assert!(gate(&mut b, &c));
    }
}
