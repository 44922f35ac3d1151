//! Display projection of the diary list.
//!
//! Pure functions: no storage, no clock. The host renders the rows as-is.

use crate::model::note::{Note, NoteId};
use crate::model::profile::Profile;
use chrono::{Local, TimeZone};

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub id: NoteId,
    /// `Date: Mon Jan 01 2024`, or `Date: N/A` for undated notes.
    pub date_label: String,
    /// `Note: <content>`.
    pub content_label: String,
    pub image: Option<String>,
    /// Alternating background, starting with the first row.
    pub striped: bool,
}

/// Header line naming both partners.
pub fn diary_title(profile: &Profile) -> String {
    format!(
        "{}'s Heart \u{2665} {}'s Heart",
        profile.partner_one, profile.partner_two
    )
}

/// The list section is hidden while there are no notes.
pub fn notes_section_visible(notes: &[Note]) -> bool {
    !notes.is_empty()
}

/// Rows in collection order, with dates shown in the device time zone.
pub fn note_rows(notes: &[Note]) -> Vec<NoteRow> {
    note_rows_in(notes, &Local)
}

/// Rows in collection order, with dates shown in `tz`.
pub fn note_rows_in<Tz: TimeZone>(notes: &[Note], tz: &Tz) -> Vec<NoteRow>
where
    Tz::Offset: std::fmt::Display,
{
    notes
        .iter()
        .enumerate()
        .map(|(index, note)| NoteRow {
            id: note.id,
            date_label: match note.date {
                Some(date) => format!("Date: {}", date.with_timezone(tz).format("%a %b %d %Y")),
                None => "Date: N/A".to_string(),
            },
            content_label: format!("Note: {}", note.content),
            image: note.image.clone(),
            striped: index % 2 == 0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{diary_title, note_rows_in, notes_section_visible};
    use crate::model::note::{Note, NoteId};
    use crate::model::profile::Profile;
    use chrono::{TimeZone, Utc};

    #[test]
    fn rows_format_dates_and_alternate_stripes() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let notes = vec![
            Note::new(NoteId(1), Some(date), "Dinner", None),
            Note::new(NoteId(2), None, "", Some("file:///b.png".to_string())),
        ];

        let rows = note_rows_in(&notes, &Utc);
        assert_eq!(rows[0].date_label, "Date: Mon Jan 01 2024");
        assert_eq!(rows[0].content_label, "Note: Dinner");
        assert!(rows[0].striped);
        assert_eq!(rows[1].date_label, "Date: N/A");
        assert_eq!(rows[1].image.as_deref(), Some("file:///b.png"));
        assert!(!rows[1].striped);
    }

    #[test]
    fn title_and_section_visibility() {
        assert_eq!(
            diary_title(&Profile::new("Ann", "Sam")),
            "Ann's Heart \u{2665} Sam's Heart"
        );
        assert!(!notes_section_visible(&[]));
    }
}
