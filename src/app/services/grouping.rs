//! Presentation stripes for ordered views
//!
//! When the view is sorted by author, consecutive books by the same author
//! share a stripe and the stripe flips at every author change. Any other
//! ordering gets plain positional alternation. Stripes never feed back into
//! filtering or sorting.

use crate::app::models::{Book, BookId, GroupStripe, SortColumn, eq_trimmed_ignore_case, is_blank};
use crate::constants::{AUTHOR_TINT_DEFAULT, AUTHOR_TINT_PALETTE};

/// Compute the stripe of every record in an ordered view
pub fn stripes_for(
    books: &[Book],
    view: &[BookId],
    active: Option<SortColumn>,
) -> Vec<GroupStripe> {
    let records = view.iter().filter_map(|id| books.get(id.0));

    if active != Some(SortColumn::Author) {
        return records
            .enumerate()
            .map(|(position, _)| {
                if position % 2 == 0 {
                    GroupStripe::Primary
                } else {
                    GroupStripe::Alternate
                }
            })
            .collect();
    }

    let mut stripes = Vec::with_capacity(view.len());
    let mut stripe = GroupStripe::Primary;
    let mut previous_author: Option<&str> = None;

    for book in records {
        let author_changed = previous_author
            .is_some_and(|previous| !eq_trimmed_ignore_case(previous, book.author()));
        if author_changed {
            stripe = stripe.flip();
        }
        stripes.push(stripe);
        previous_author = Some(book.author());
    }

    stripes
}

/// Write the stripes for an ordered view back onto its records
///
/// Records outside the view keep whatever stripe they had.
pub fn annotate(books: &mut [Book], view: &[BookId], active: Option<SortColumn>) {
    let stripes = stripes_for(books, view, active);

    for (id, stripe) in view.iter().zip(stripes) {
        if let Some(book) = books.get_mut(id.0) {
            book.set_group_stripe(stripe);
        }
    }
}

/// Palette entry used to tint an author's detail card
///
/// The hash is FNV-1a over the lowercased, trimmed author so the tint is
/// stable across runs and capitalisation variants.
pub fn author_tint(author: &str) -> (&'static str, [u8; 3]) {
    if is_blank(author) {
        return AUTHOR_TINT_DEFAULT;
    }

    let hash = author
        .trim()
        .to_lowercase()
        .bytes()
        .fold(0x811c_9dc5_u32, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
        });

    AUTHOR_TINT_PALETTE[hash as usize % AUTHOR_TINT_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::BookFields;

    fn books(authors: &[&str]) -> Vec<Book> {
        authors
            .iter()
            .enumerate()
            .map(|(i, author)| {
                Book::new(
                    BookId(i),
                    BookFields {
                        title: format!("Book {}", i),
                        author: author.to_string(),
                        ..BookFields::default()
                    },
                )
            })
            .collect()
    }

    fn indices(stripes: &[GroupStripe]) -> Vec<u8> {
        stripes.iter().map(|stripe| stripe.index()).collect()
    }

    fn view(books: &[Book]) -> Vec<BookId> {
        books.iter().map(Book::id).collect()
    }

    #[test]
    fn test_author_groups_share_a_stripe() {
        let books = books(&["A", "A", "B", "B", "C"]);
        let stripes = stripes_for(&books, &view(&books), Some(SortColumn::Author));

        assert_eq!(indices(&stripes), vec![0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_other_columns_alternate_by_position() {
        let books = books(&["A", "A", "B", "B", "C"]);

        for active in [Some(SortColumn::Title), Some(SortColumn::Series), None] {
            let stripes = stripes_for(&books, &view(&books), active);
            assert_eq!(indices(&stripes), vec![0, 1, 0, 1, 0]);
        }
    }

    #[test]
    fn test_author_groups_ignore_case_and_padding() {
        let books = books(&["Brandon Sanderson", "brandon sanderson ", "Frank Herbert"]);
        let stripes = stripes_for(&books, &view(&books), Some(SortColumn::Author));

        assert_eq!(indices(&stripes), vec![0, 0, 1]);
    }

    #[test]
    fn test_annotate_writes_stripes_in_view_order() {
        let mut books = books(&["A", "B", "C"]);
        let ordered = vec![BookId(2), BookId(0)];

        annotate(&mut books, &ordered, Some(SortColumn::Title));

        assert_eq!(books[2].group_stripe(), GroupStripe::Primary);
        assert_eq!(books[0].group_stripe(), GroupStripe::Alternate);
        assert_eq!(books[1].group_stripe(), GroupStripe::Primary);
    }

    #[test]
    fn test_empty_view() {
        let books = books(&[]);
        assert!(stripes_for(&books, &[], Some(SortColumn::Author)).is_empty());
    }

    #[test]
    fn test_author_tint_is_deterministic() {
        assert_eq!(author_tint(""), AUTHOR_TINT_DEFAULT);
        assert_eq!(author_tint("   "), AUTHOR_TINT_DEFAULT);
        assert_eq!(
            author_tint("Brandon Sanderson"),
            author_tint(" brandon sanderson")
        );
        assert!(AUTHOR_TINT_PALETTE.contains(&author_tint("Frank Herbert")));
    }
}
