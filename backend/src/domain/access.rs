//! Access gate: maps an optional viewer to vote and ownership permissions.
//!
//! Everything here is pure; no persistence is consulted.

use super::{Error, Question, Topic, User, Viewer};

/// Records that carry an author snapshot.
pub trait Authored {
    /// The author recorded at creation time.
    fn author(&self) -> &User;
}

impl Authored for Topic {
    fn author(&self) -> &User {
        Topic::author(self)
    }
}

impl Authored for Question {
    fn author(&self) -> &User {
        Question::author(self)
    }
}

/// Whether the viewer may vote at all. Anonymous viewers may not.
pub fn can_vote(viewer: &Viewer) -> bool {
    viewer.is_authenticated()
}

/// Whether the viewer authored `entity`, by external id equality.
///
/// # Examples
/// ```
/// use agora::domain::access::owns;
/// use agora::domain::{Question, QuestionId, QuestionText, TopicId, User, Viewer};
/// use chrono::Utc;
///
/// let author = User::try_from_strings("oauth|1", "Ada").expect("valid user");
/// let question = Question::new(
///     QuestionId::random(),
///     TopicId::random(),
///     QuestionText::new("Why?").expect("valid text"),
///     author.clone(),
///     Utc::now(),
/// );
/// assert!(owns(&question, &Viewer::authenticated(author)));
/// assert!(!owns(&question, &Viewer::anonymous()));
/// ```
pub fn owns<E>(entity: &E, viewer: &Viewer) -> bool
where
    E: Authored + ?Sized,
{
    viewer
        .external_id()
        .is_some_and(|id| id == entity.author().external_id())
}

/// Return the viewer's identity or an `unauthorized` error.
pub fn require_voter(viewer: &Viewer) -> Result<&User, Error> {
    viewer
        .user()
        .ok_or_else(|| Error::unauthorized("login required"))
}
