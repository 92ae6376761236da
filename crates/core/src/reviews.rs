//! Reviews
//!
//! Reviews are append-only; the feed assigns each one an id and timestamp.

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::ProductId;

/// Errors raised while preparing a review for submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Rating outside 1..=5.
    #[error("Please select a rating between 1 and 5.")]
    InvalidRating(u8),

    /// Comment is empty after trimming.
    #[error("Please enter a comment.")]
    EmptyComment,
}

/// Star rating between one and five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;

    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Returns the number of stars.
    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReviewError::InvalidRating(value))
        }
    }
}

/// Identity of a review's submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewAuthor {
    /// Identity provider user id
    pub uid: String,

    /// Email shown next to the review
    pub email: String,
}

/// A review ready to submit to the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    /// Star rating
    pub rating: Rating,

    /// Trimmed comment text
    pub comment: String,

    /// Submitter
    pub author: ReviewAuthor,
}

impl NewReview {
    /// Validate raw review input.
    ///
    /// # Errors
    ///
    /// Returns a [`ReviewError`] for an out-of-range rating or a blank comment.
    pub fn new(rating: u8, comment: &str, author: ReviewAuthor) -> Result<Self, ReviewError> {
        let rating = Rating::try_from(rating)?;
        let comment = comment.trim();

        if comment.is_empty() {
            return Err(ReviewError::EmptyComment);
        }

        Ok(Self {
            rating,
            comment: comment.to_string(),
            author,
        })
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Feed-assigned id
    pub id: String,

    /// Reviewed product
    pub product: ProductId,

    /// Star rating
    pub rating: Rating,

    /// Comment text
    pub comment: String,

    /// Submitter
    pub author: ReviewAuthor,

    /// Feed-assigned creation time
    pub created_at: Timestamp,
}

impl Review {
    /// Store a new review under a feed-assigned id and timestamp.
    pub fn from_new(
        id: impl Into<String>,
        product: ProductId,
        review: NewReview,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            product,
            rating: review.rating,
            comment: review.comment,
            author: review.author,
            created_at,
        }
    }
}

/// All reviews of one product, as last delivered by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSnapshot {
    product: ProductId,
    reviews: Vec<Review>,
}

impl ReviewSnapshot {
    /// An empty snapshot for a product.
    pub fn empty(product: ProductId) -> Self {
        Self {
            product,
            reviews: Vec::new(),
        }
    }

    /// Append a review.
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// The reviewed product.
    pub fn product(&self) -> &ProductId {
        &self.product
    }

    /// Number of reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Check if there are no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Summarise the snapshot for display.
    pub fn summary(&self) -> ReviewSummary {
        let mut reviews = self.reviews.clone();

        reviews.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        let average = if reviews.is_empty() {
            None
        } else {
            let total: Decimal = reviews
                .iter()
                .map(|review| Decimal::from(review.rating.stars()))
                .sum();

            Some((total / Decimal::from(reviews.len())).round_dp(1))
        };

        ReviewSummary { reviews, average }
    }
}

/// Reviews newest first, with their average rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Reviews, newest first
    pub reviews: Vec<Review>,

    /// Average rating to one decimal place, `None` without reviews
    pub average: Option<Decimal>,
}
