use std::sync::Arc;
use vbridge_derive::Element;
use vbridge_domain::element::{Element, ElementRef, TypeTag};

#[derive(Debug, Element)]
struct Frame {
    width: u32,
}

#[derive(Debug, Element)]
struct Label(String);

#[test]
fn derived_element_reports_its_own_tag() {
    let frame = Frame { width: 320 };
    assert_eq!(frame.type_tag(), TypeTag::of::<Frame>());
    assert!(TypeTag::of::<Frame>().matches(&frame));
    assert!(!TypeTag::of::<Label>().matches(&frame));
}

#[test]
fn erased_reference_downcasts_to_concrete_type() {
    let mut frame = Frame { width: 320 };
    let erased: &mut dyn Element = &mut frame;

    erased.as_any_mut().downcast_mut::<Frame>().expect("frame").width = 640;
    assert_eq!(erased.as_any().downcast_ref::<Frame>().map(|f| f.width), Some(640));
    assert!(erased.as_any().downcast_ref::<Label>().is_none());
}

#[test]
fn shared_handle_downcasts_without_cloning_the_element() {
    let label: ElementRef = Arc::new(Label("title".to_owned()));
    let tag = label.type_tag();
    assert_eq!(tag, TypeTag::of::<Label>());

    let concrete = label.clone().into_any().downcast::<Label>().expect("label");
    assert_eq!(concrete.0, "title");
    assert_eq!(Arc::strong_count(&label), 2);
}
