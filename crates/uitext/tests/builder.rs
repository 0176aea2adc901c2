//! Tests for the `build_ui_text` DSL.

use futures::executor::block_on;
use uitext::{
    AnnotatedArgument, Annotation, Argument, Catalog, Color, LinkAnnotation, ParagraphStyle,
    ResourceId, SpanStyle, TextAlign, UIText, UITextBuilder, build_ui_text,
};

const GREETING: ResourceId = ResourceId::from_name("greeting");
const PRODUCTS: ResourceId = ResourceId::from_name("products");
const CART: ResourceId = ResourceId::from_name("shopping_cart_status");
const INSERT_CART: ResourceId = ResourceId::from_name("shopping_cart_status_insert_shopping_cart");
const LEGAL: ResourceId = ResourceId::from_name("legal_footer_example");
const TERMS: ResourceId = ResourceId::from_name("legal_footer_example_terms_of_service");
const PRIVACY: ResourceId = ResourceId::from_name("legal_footer_example_privacy_policy");

fn red() -> SpanStyle {
    SpanStyle::builder().color(Color::RED).build()
}

fn centered() -> ParagraphStyle {
    ParagraphStyle::builder().text_align(TextAlign::Center).build()
}

// =========================================================================
// Collapse Rule
// =========================================================================

#[test]
fn empty_builder_yields_empty_raw() {
    assert_eq!(build_ui_text(|_| {}), UIText::Raw(String::new()));
}

#[test]
fn single_component_is_returned_unwrapped() {
    let text = build_ui_text(|b| {
        b.res(GREETING);
    });
    assert_eq!(text, UIText::res(GREETING));
}

#[test]
fn many_components_become_compound_in_order() {
    let text = build_ui_text(|b| {
        b.raw("a").res(GREETING).plural_res(PRODUCTS, 3);
    });
    assert_eq!(
        text,
        UIText::Compound(vec![
            UIText::raw("a"),
            UIText::res(GREETING),
            UIText::plural_res(PRODUCTS, 3),
        ])
    );
}

#[test]
fn builder_can_be_driven_directly() {
    let mut builder = UITextBuilder::new();
    builder.raw("x");
    builder.node(UIText::raw("y"));
    assert_eq!(
        builder.build(),
        UIText::compound([UIText::raw("x"), UIText::raw("y")])
    );
}

// =========================================================================
// Arguments
// =========================================================================

#[test]
fn res_with_collects_arguments_in_order() {
    let text = build_ui_text(|b| {
        b.res_with(GREETING, |a| {
            a.arg("Radu").arg(3).arg(UIText::res(TERMS));
        });
    });
    assert_eq!(
        text,
        UIText::Res {
            id: GREETING,
            args: vec![
                Argument::from("Radu"),
                Argument::Text("3".to_string()),
                Argument::Node(UIText::res(TERMS)),
            ],
        }
    );
}

#[test]
fn plural_res_without_arguments_leaves_list_empty() {
    let text = build_ui_text(|b| {
        b.plural_res_with(PRODUCTS, 30, |_| {});
    });
    assert_eq!(
        text,
        UIText::PluralRes {
            id: PRODUCTS,
            quantity: 30,
            args: Vec::new(),
        }
    );
}

#[test]
fn annotated_arguments_keep_their_annotation_lists() {
    let link = LinkAnnotation::url("https://example.com/terms");
    let text = build_ui_text(|b| {
        b.res_annotated(LEGAL, |a| {
            a.annotation(|ann| {
                ann.paragraph(centered());
            });
            a.arg_with(UIText::res(TERMS), |ann| {
                ann.link(link.clone()).span(red());
            });
            a.arg_annotated(UIText::res(PRIVACY), Annotation::url("https://example.com/privacy"));
            a.arg("plain");
        });
    });

    assert_eq!(
        text,
        UIText::ResAnnotated {
            id: LEGAL,
            args: vec![
                AnnotatedArgument {
                    value: Argument::Node(UIText::res(TERMS)),
                    annotations: vec![Annotation::Link(link), Annotation::Span(red())],
                },
                AnnotatedArgument {
                    value: Argument::Node(UIText::res(PRIVACY)),
                    annotations: vec![Annotation::url("https://example.com/privacy")],
                },
                AnnotatedArgument::from("plain"),
            ],
            base_annotations: vec![Annotation::Paragraph(centered())],
        }
    );
}

#[test]
fn base_annotations_accumulate_in_order() {
    let text = build_ui_text(|b| {
        b.plural_res_annotated(PRODUCTS, 2, |a| {
            a.base(red()).base(centered());
            a.annotation(|ann| {
                ann.push(LinkAnnotation::clickable("products"));
            });
        });
    });

    let UIText::PluralResAnnotated {
        quantity,
        args,
        base_annotations,
        ..
    } = text
    else {
        panic!("expected PluralResAnnotated");
    };
    assert_eq!(quantity, 2);
    assert!(args.is_empty());
    assert_eq!(
        base_annotations,
        vec![
            Annotation::Span(red()),
            Annotation::Paragraph(centered()),
            Annotation::Link(LinkAnnotation::clickable("products")),
        ]
    );
}

// =========================================================================
// End To End
// =========================================================================

#[test]
fn built_tree_resolves_like_hand_written_tree() {
    let mut catalog = Catalog::new();
    catalog
        .load_table_str(
            "en",
            r#"{
                "strings": {
                    "shopping_cart_status": "%1$s - %2$s",
                    "shopping_cart_status_insert_shopping_cart": "Insert Shopping Cart"
                },
                "plurals": { "products": { "one": "%s product", "other": "%s products" } }
            }"#,
        )
        .unwrap();

    let built = build_ui_text(|b| {
        b.res_annotated(CART, |a| {
            a.arg(UIText::plural_res(PRODUCTS, 30));
            a.arg_with(UIText::res(INSERT_CART), |ann| {
                ann.span(red());
            });
        });
    });
    let by_hand = UIText::res_annotated(
        CART,
        [
            AnnotatedArgument::from(UIText::plural_res(PRODUCTS, 30)),
            Argument::from(UIText::res(INSERT_CART)).annotated([Annotation::Span(red())]),
        ],
        [],
    );

    assert_eq!(built, by_hand);
    assert_eq!(
        block_on(built.resolve(&catalog)).unwrap().to_markup(),
        "30 products - <span color=#ff0000>Insert Shopping Cart</span>"
    );
}
