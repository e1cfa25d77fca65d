use super::*;
use crate::detail::{render_detail, ParentLink};
use shared::{
    domain::{Annotation, AnnotationId, Rating, Resource, ResourceId},
    protocol::DetailProps,
};

fn props() -> DetailProps {
    DetailProps::loaded(
        Resource {
            id: ResourceId(0),
            name: "React Lake".to_string(),
            description: "Nestled in the foothills".to_string(),
            image: "images/react-lake.jpg".to_string(),
        },
        vec![Annotation {
            id: AnnotationId(1),
            resource_id: ResourceId(0),
            rating: Rating::ALL[4],
            author: "Jo".to_string(),
            body: "Great".to_string(),
            date: "2024-03-02".to_string(),
        }],
    )
}

#[test]
fn loaded_text_lists_breadcrumbs_and_entries() {
    let text = render_text(&render_detail(&props(), &ParentLink::default()));
    assert!(text.starts_with("Directory </home> / React Lake\n"));
    assert!(text.contains("Nestled in the foothills"));
    assert!(text.contains("Comments\n  Great\n  -- Jo, Mar 02, 2024\n"));
    assert!(text.ends_with("[Submit comment]\n"));
}

#[test]
fn loading_and_error_text_show_nothing_else() {
    let loading = DetailProps {
        loading: true,
        ..props()
    };
    assert_eq!(
        render_text(&render_detail(&loading, &ParentLink::default())),
        "Loading...\n"
    );

    let failed = DetailProps::failed("Not found");
    assert_eq!(
        render_text(&render_detail(&failed, &ParentLink::default())),
        "Not found\n"
    );
    assert_eq!(
        render_text(&render_detail(&DetailProps::default(), &ParentLink::default())),
        ""
    );
}

#[test]
fn form_text_shows_touched_messages_only() {
    let form = AnnotationForm::new(ResourceId(0));
    assert_eq!(render_form_text(&form), "");

    let form = form.toggle().change(Field::Author, "A");
    let text = render_form_text(&form);
    assert!(text.contains("Your Name: A\n"));
    assert!(!text.contains("Must be at least"));

    let text = render_form_text(&form.blur(Field::Author));
    assert!(text.contains("Your Name: A\n  ! Must be at least 2 characters\n"));
}
