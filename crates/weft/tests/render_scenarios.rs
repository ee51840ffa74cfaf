//! End-to-end scenarios: schema construction through rendering.

use weft::{
    render, Choices, DataType, DomainError, ErrorClass, Parameter, ParameterBag, Section, Template,
};

#[test]
fn test_hello_world_conditional() {
    let template = Template::builder("greeting")
        .text("Hello, ")
        .conditional("enabled", Section::builder().dynamic("name").build())
        .build()
        .unwrap();

    let params = ParameterBag::empty()
        .with("enabled", true)
        .with("name", "World");
    assert_eq!(render(&template, &params).unwrap(), "Hello, World");

    let params = ParameterBag::empty().with("enabled", false);
    assert_eq!(render(&template, &params).unwrap(), "Hello, ");
}

#[test]
fn test_repetition_counts() {
    let template = Template::builder("repeat")
        .repetition("n", "A")
        .build()
        .unwrap();

    assert_eq!(
        render(&template, &ParameterBag::empty().with("n", 3)).unwrap(),
        "AAA"
    );
    assert_eq!(
        render(&template, &ParameterBag::empty().with("n", 0)).unwrap(),
        ""
    );
}

#[test]
fn test_one_of_selection() {
    let template = Template::builder("salutation")
        .one_of(
            "tone",
            Choices::new()
                .choice("formal", "Dear ")
                .choice("casual", "Hey "),
        )
        .dynamic("name")
        .build()
        .unwrap();

    // The top-level dynamic part is normalized into a leading unconditional,
    // so it renders before the selected choice.
    let params = ParameterBag::empty()
        .with("tone", "casual")
        .with("name", "Sam");
    assert_eq!(render(&template, &params).unwrap(), "SamHey ");
}

#[test]
fn test_mixed_template_end_to_end() {
    // All top-level text lands in the single leading unconditional, so the
    // heading is the only top-level content here; everything positional goes
    // through explicit sections.
    let template = Template::builder("report")
        .text("Report")
        .optional("subtitle", Section::builder().text(" - ").dynamic("subtitle").build())
        .repetition("rows", Section::builder().text("\nrow").build())
        .one_of(
            "footer",
            Choices::new()
                .choice("short", "\nend")
                .choice("long", "\nend of report"),
        )
        .build()
        .unwrap();

    let params = ParameterBag::empty()
        .with("subtitle", "Q3")
        .with("rows", 2)
        .with("footer", "long");
    assert_eq!(
        render(&template, &params).unwrap(),
        "Report - Q3\nrow\nrow\nend of report"
    );
    // "subtitle" is presence-gated: any kind counts as present.

    // Without the optional subtitle the gated section simply drops out.
    let params = ParameterBag::empty().with("rows", 0).with("footer", "short");
    assert_eq!(render(&template, &params).unwrap(), "Report\nend");
}

#[test]
fn test_rendering_is_deterministic() {
    let template = Template::builder("idempotent")
        .text("x=")
        .dynamic("x")
        .repetition("n", "!")
        .build()
        .unwrap();
    let params = ParameterBag::empty().with("x", "1").with("n", 2);

    let first = render(&template, &params).unwrap();
    let second = render(&template, &params).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "x=1!!");
}

#[test]
fn test_declared_catalogue_is_not_consulted() {
    // A catalogue may declare "count" as Boolean and "name" as Number; the
    // engine resolves values by name and by point-of-use kind only, so the
    // declarations have no effect on rendering. This is deliberate, not a
    // validation gap to be closed silently.
    let _catalogue = vec![
        Parameter::new("count", "How many rows", DataType::Boolean),
        Parameter::new("name", "Who to greet", DataType::Number),
    ];

    let template = Template::builder("uncross-checked")
        .repetition("count", "*")
        .dynamic("name")
        .build()
        .unwrap();

    let params = ParameterBag::empty().with("count", 2).with("name", "Ada");
    assert_eq!(render(&template, &params).unwrap(), "Ada**");
}

#[test]
fn test_error_classes_map_to_two_client_classes() {
    let construction = Template::builder("").build().unwrap_err();
    assert_eq!(construction.class(), ErrorClass::Construction);

    let template = Template::builder("T")
        .conditional("flag", "x")
        .build()
        .unwrap();
    let render_err = render(&template, &ParameterBag::empty()).unwrap_err();
    assert_eq!(render_err.class(), ErrorClass::Render);
    assert_eq!(render_err, DomainError::missing_parameter("flag"));
}

#[test]
fn test_template_survives_serialization() {
    // The persistence collaborator stores templates as opaque documents;
    // a stored-then-loaded template renders identically.
    let template = Template::builder("stored")
        .text("v=")
        .dynamic("v")
        .build()
        .unwrap();
    let json = serde_json::to_string(&template).unwrap();
    let loaded: Template = serde_json::from_str(&json).unwrap();

    let params = ParameterBag::empty().with("v", 9);
    assert_eq!(
        render(&loaded, &params).unwrap(),
        render(&template, &params).unwrap()
    );
}

#[test]
fn test_parameter_bag_from_wire_format() {
    // A request layer deserializes the parameter map straight from JSON; the
    // scalar-only restriction is enforced at that boundary.
    let params: ParameterBag =
        serde_json::from_str(r#"{"enabled": true, "name": "World"}"#).unwrap();
    let template = Template::builder("greeting")
        .text("Hello, ")
        .conditional("enabled", Section::builder().dynamic("name").build())
        .build()
        .unwrap();
    assert_eq!(render(&template, &params).unwrap(), "Hello, World");
}
