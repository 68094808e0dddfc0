//! Tests for choosing the root of a render pass.

use layerkit_document::{
    ArtboardNode, ComponentInstanceNode, ComponentProperty, Document, MainComponentNode, Node,
    NodeKind, Point, StartPoint,
};
use layerkit_model::{ResolutionContext, Value, Variable};
use serde_json::json;

fn artboard(name: &str) -> Node {
    Node::new(ArtboardNode::default()).with_name(name)
}

fn component(name: &str) -> Node {
    Node::new(MainComponentNode {
        properties: vec![ComponentProperty {
            name: "title".into(),
            value: Value::from("Default"),
        }],
        position: Point::new(0.0, 0.0),
    })
    .with_name(name)
}

fn name_of(start: StartPoint<'_>) -> Option<&str> {
    match start {
        StartPoint::Artboard(node) | StartPoint::Component(node) => node.name.as_deref(),
        StartPoint::None => None,
    }
}

#[test]
fn test_component_when_no_artboards() {
    let document = Document::new(vec![component("A")]);
    let start = document.start_point(None);
    assert!(matches!(start, StartPoint::Component(_)));
    assert_eq!(name_of(start), Some("A"));
}

#[test]
fn test_artboard_before_component() {
    let document = Document::new(vec![component("A"), artboard("Home")]);
    let start = document.start_point(None);
    assert!(matches!(start, StartPoint::Artboard(_)));
    assert_eq!(name_of(start), Some("Home"));
}

#[test]
fn test_preferred_name_wins() {
    let document = Document::new(vec![artboard("Home"), artboard("Detail"), component("Card")]);
    assert_eq!(name_of(document.start_point(Some("Detail"))), Some("Detail"));
    assert!(matches!(
        document.start_point(Some("Card")),
        StartPoint::Component(_)
    ));
}

#[test]
fn test_preferred_artboard_before_component_of_same_name() {
    let document = Document::new(vec![component("Shared"), artboard("Home"), artboard("Shared")]);
    let start = document.start_point(Some("Shared"));
    assert_eq!(start, StartPoint::Artboard(&document.nodes[2]));
}

#[test]
fn test_unknown_name_falls_back() {
    let document = Document::new(vec![component("A"), artboard("Home")]);
    assert_eq!(name_of(document.start_point(Some("Missing"))), Some("Home"));
}

#[test]
fn test_empty_document_has_no_start() {
    assert_eq!(Document::default().start_point(None), StartPoint::None);
    assert_eq!(Document::default().start_point(Some("Home")), StartPoint::None);
}

#[test]
fn test_start_point_after_read() {
    let bytes = serde_json::to_vec(&json!({
        "version": 17,
        "children": [{
            "__typeName": "MainComponentNode",
            "id": "6b1d3f0e-2a57-4d8e-9b83-2f6f3c1a9e10",
            "name": "A",
            "position": {"x": 0, "y": 0},
            "children": []
        }]
    }))
    .unwrap();
    let document = Document::read(&bytes).unwrap();
    assert_eq!(name_of(document.start_point(None)), Some("A"));
}

#[test]
fn test_instantiate_component() {
    let card = component("Card");
    let instance = ComponentInstanceNode::new(card.id)
        .with_override("title", Variable::literal(Value::from("Featured")))
        .with_override("subtitle", Variable::literal(Value::from("ignored")));
    let document = Document::new(vec![
        artboard("Home").with_child(Node::new(instance.clone())),
        card,
    ]);

    let (body, values) = document
        .instantiate(&instance, &ResolutionContext::new())
        .unwrap();
    assert!(matches!(body.kind, NodeKind::MainComponent(_)));
    assert_eq!(values.len(), 1);
    assert_eq!(values["title"], Value::from("Featured"));

    let dangling = ComponentInstanceNode::new(uuid::Uuid::nil());
    assert!(document.instantiate(&dangling, &ResolutionContext::new()).is_none());
}
