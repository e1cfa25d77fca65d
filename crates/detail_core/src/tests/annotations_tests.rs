use super::*;

fn annotation(id: i64, body: &str, author: &str, date: &str) -> Annotation {
    Annotation {
        id: AnnotationId(id),
        resource_id: ResourceId(0),
        rating: Rating::ALL[4],
        author: author.to_string(),
        body: body.to_string(),
        date: date.to_string(),
    }
}

#[test]
fn formats_plain_date() {
    assert_eq!(format_date("2024-03-02"), "Mar 02, 2024");
}

#[test]
fn formats_timestamps_in_common_iso_shapes() {
    assert_eq!(format_date("2018-10-25T16:30Z"), "Oct 25, 2018");
    assert_eq!(format_date("2018-10-25T16:30:00.000Z"), "Oct 25, 2018");
    assert_eq!(format_date("2019-01-05T08:00:00"), "Jan 05, 2019");
    assert_eq!(format_date("2020-12-31T23:30:00-02:00"), "Jan 01, 2021");
}

#[test]
fn unparseable_date_is_shown_verbatim() {
    assert_eq!(format_date("last tuesday"), "last tuesday");
}

#[test]
fn absent_list_renders_nothing() {
    assert_eq!(render_annotations(None, ResourceId(1)), None);
}

#[test]
fn empty_list_still_renders_header_and_form() {
    let view = render_annotations(Some(&[]), ResourceId(1)).expect("rendered");
    assert_eq!(view.header, "Comments");
    assert!(view.entries.is_empty());
    assert_eq!(view.form, FormMount { resource_id: ResourceId(1) });
}

#[test]
fn single_entry_is_formatted() {
    let list = [annotation(1, "Great", "Jo", "2024-03-02")];
    let view = render_annotations(Some(&list), ResourceId(1)).expect("rendered");
    assert_eq!(
        view.entries,
        vec![AnnotationEntry {
            id: AnnotationId(1),
            body: "Great".to_string(),
            author: "Jo".to_string(),
            rating: Rating::ALL[4],
            date: "Mar 02, 2024".to_string(),
        }]
    );
}

#[test]
fn entries_keep_supplied_order() {
    let list = [
        annotation(7, "later", "B", "2024-05-01"),
        annotation(2, "earlier", "A", "2020-01-01"),
        annotation(5, "middle", "C", "2022-01-01"),
    ];
    let view = render_annotations(Some(&list), ResourceId(1)).expect("rendered");
    let ids: Vec<i64> = view.entries.iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![7, 2, 5]);
}
