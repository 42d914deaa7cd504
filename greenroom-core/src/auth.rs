use greenroom_state::Artist;

/// Find the artist whose shared password matches.
///
/// The store keeps passwords in plaintext, so this is a plain membership
/// check over the loaded artist set. `None` surfaces as an inline login
/// error; there is no lockout or attempt tracking.
pub fn authenticate<'a>(artists: &'a [Artist], password: &str) -> Option<&'a Artist> {
    artists.iter().find(|artist| artist.password == password)
}
