use vbridge_domain::element::{Element, TypeTag};

#[derive(Debug, vbridge_derive::Element)]
struct Panel {
    items: Vec<u32>,
}

#[derive(Debug, vbridge_derive::Element)]
struct Wrapper<T: std::fmt::Debug + Send + Sync + 'static>(T);

fn main() {
    let panel = Panel { items: vec![1, 2] };
    assert_eq!(panel.type_tag(), TypeTag::of::<Panel>());
    assert_eq!(panel.items.len(), 2);

    let wrapped = Wrapper(7_u8);
    assert_eq!(wrapped.type_tag(), TypeTag::of::<Wrapper<u8>>());
    assert_eq!(wrapped.0, 7);
}
