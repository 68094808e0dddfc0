//! Node decode/encode driver.

use serde_json::Value;

use crate::codec::context::DecodeContext;
use crate::codec::fields::{FieldWriter, Fields, TYPE_NAME_KEY};
use crate::codec::registry;
use crate::error::{DecodeError, EncodeError};
use crate::node::{Node, NodeKind};

/// Per-kind field codec.
///
/// `decode` reads only the kind-specific fields; id, name and children
/// are handled by [`decode_node`]. `encode` writes the current shape.
pub(crate) trait KindCodec: Sized {
    fn decode(fields: &Fields<'_>) -> Result<Self, DecodeError>;

    fn encode(&self, writer: &mut FieldWriter) -> Result<(), EncodeError>;
}

/// Registry adapter from a kind's codec to a [`NodeKind`].
pub(crate) fn decode_kind<K>(fields: &Fields<'_>) -> Result<NodeKind, DecodeError>
where
    K: KindCodec + Into<NodeKind>,
{
    K::decode(fields).map(Into::into)
}

/// Decode one tagged node and, recursively, its children.
///
/// The tag is read first and dispatched through the registry; an
/// unregistered tag fails with [`DecodeError::UnknownNodeType`].
pub fn decode_node(value: &Value, context: &DecodeContext) -> Result<Node, DecodeError> {
    let map = value
        .as_object()
        .ok_or_else(|| DecodeError::malformed("Node", "", "object"))?;
    let type_name = map
        .get(TYPE_NAME_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| DecodeError::malformed("Node", TYPE_NAME_KEY, "string"))?;
    let node_type =
        registry::lookup(type_name).ok_or_else(|| DecodeError::UnknownNodeType {
            type_name: type_name.to_string(),
        })?;

    let fields = Fields::new(node_type.type_name, map, context);
    let id = fields.required("id")?;
    let name = fields.optional("name")?;
    let children = fields.nodes("children")?;
    let kind = node_type.decode(&fields)?;

    Ok(Node {
        id,
        name,
        children,
        kind,
    })
}

/// Encode one node and its children at the current schema.
pub fn encode_node(node: &Node) -> Result<Value, EncodeError> {
    let mut writer = FieldWriter::tagged(node.type_name());
    writer.put("id", &node.id)?;
    writer.put_if_present("name", node.name.as_ref())?;
    writer.put_nodes("children", &node.children)?;
    encode_kind(&node.kind, &mut writer)?;
    Ok(writer.finish())
}

fn encode_kind(kind: &NodeKind, writer: &mut FieldWriter) -> Result<(), EncodeError> {
    match kind {
        NodeKind::Artboard(k) => k.encode(writer),
        NodeKind::MainComponent(k) => k.encode(writer),
        NodeKind::Button(k) => k.encode(writer),
        NodeKind::Collection(k) => k.encode(writer),
        NodeKind::ComponentInstance(k) => k.encode(writer),
        NodeKind::Conditional(k) => k.encode(writer),
        NodeKind::DataSource(k) => k.encode(writer),
        NodeKind::HStack(k) => k.encode(writer),
        NodeKind::Image(k) => k.encode(writer),
        NodeKind::RoundedRectangle(k) => k.encode(writer),
        NodeKind::ScrollView(k) => k.encode(writer),
        NodeKind::SecureField(k) => k.encode(writer),
        NodeKind::Spacer(k) => k.encode(writer),
        NodeKind::Stepper(k) => k.encode(writer),
        NodeKind::TextField(k) => k.encode(writer),
        NodeKind::Text(k) => k.encode(writer),
        NodeKind::Toggle(k) => k.encode(writer),
        NodeKind::VStack(k) => k.encode(writer),
        NodeKind::ZStack(k) => k.encode(writer),
        NodeKind::AccessibilityAddTraits(k) => k.encode(writer),
        NodeKind::AccessibilityElement(k) => k.encode(writer),
        NodeKind::AccessibilityHidden(k) => k.encode(writer),
        NodeKind::AccessibilityLabel(k) => k.encode(writer),
        NodeKind::AccessibilitySortPriority(k) => k.encode(writer),
        NodeKind::AspectRatio(k) => k.encode(writer),
        NodeKind::Background(k) => k.encode(writer),
        NodeKind::BlendMode(k) => k.encode(writer),
        NodeKind::ButtonStyle(k) => k.encode(writer),
        NodeKind::Font(k) => k.encode(writer),
        NodeKind::ForegroundColor(k) => k.encode(writer),
        NodeKind::Frame(k) => k.encode(writer),
        NodeKind::IndexViewStyle(k) => k.encode(writer),
        NodeKind::LayoutPriority(k) => k.encode(writer),
        NodeKind::LineLimit(k) => k.encode(writer),
        NodeKind::Mask(k) => k.encode(writer),
        NodeKind::MultilineTextAlignment(k) => k.encode(writer),
        NodeKind::NavigationBarBackButtonHidden(k) => k.encode(writer),
        NodeKind::NavigationBarHidden(k) => k.encode(writer),
        NodeKind::NavigationBarTitleDisplayMode(k) => k.encode(writer),
        NodeKind::NavigationTitle(k) => k.encode(writer),
        NodeKind::Offset(k) => k.encode(writer),
        NodeKind::Opacity(k) => k.encode(writer),
        NodeKind::Overlay(k) => k.encode(writer),
        NodeKind::Padding(k) => k.encode(writer),
        NodeKind::RotationEffect(k) => k.encode(writer),
        NodeKind::Shadow(k) => k.encode(writer),
        NodeKind::TabItem(k) => k.encode(writer),
        NodeKind::TabViewStyle(k) => k.encode(writer),
        NodeKind::TextCase(k) => k.encode(writer),
        NodeKind::Tint(k) => k.encode(writer),
        NodeKind::ToolbarBackgroundColor(k) => k.encode(writer),
        NodeKind::ToolbarBackgroundVisibility(k) => k.encode(writer),
        NodeKind::ToolbarColorScheme(k) => k.encode(writer),
        NodeKind::ToolbarItem(k) => k.encode(writer),
        NodeKind::Container
        | NodeKind::Capsule
        | NodeKind::Circle
        | NodeKind::Divider
        | NodeKind::Ellipse
        | NodeKind::NavigationLink
        | NodeKind::NavigationStack
        | NodeKind::Rectangle
        | NodeKind::TabView
        | NodeKind::Bold
        | NodeKind::Italic => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::version::CURRENT_VERSION;
    use crate::kinds::TextLayer;
    use layerkit_model::Variable;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn unknown_tag_is_a_hard_failure() {
        let value = json!({
            "__typeName": "HologramLayer",
            "id": Uuid::nil(),
            "children": []
        });
        let result = decode_node(&value, &DecodeContext::new(CURRENT_VERSION));
        assert!(matches!(
            result,
            Err(DecodeError::UnknownNodeType { type_name }) if type_name == "HologramLayer"
        ));
    }

    #[test]
    fn missing_tag_is_malformed() {
        let value = json!({"id": Uuid::nil(), "children": []});
        let result = decode_node(&value, &DecodeContext::new(CURRENT_VERSION));
        assert!(matches!(
            result,
            Err(DecodeError::MalformedField { field, .. }) if field == TYPE_NAME_KEY
        ));
    }

    #[test]
    fn unknown_child_fails_the_parent() {
        let value = json!({
            "__typeName": "ContainerNode",
            "id": Uuid::nil(),
            "children": [{"__typeName": "Mystery", "id": Uuid::nil(), "children": []}]
        });
        assert!(matches!(
            decode_node(&value, &DecodeContext::new(CURRENT_VERSION)),
            Err(DecodeError::UnknownNodeType { .. })
        ));
    }

    #[test]
    fn name_is_omitted_when_absent() {
        let node = Node::new(TextLayer {
            value: Variable::from("Hi"),
        })
        .with_id(Uuid::nil());
        let encoded = encode_node(&node).unwrap();
        assert_eq!(
            serde_json::to_string(&encoded).unwrap(),
            r#"{"__typeName":"TextLayer","id":"00000000-0000-0000-0000-000000000000","children":[],"value":{"kind":"literal","value":"Hi"}}"#
        );
    }

    #[test]
    fn tag_is_written_first() {
        let node = Node::new(NodeKind::Bold).with_name("bold");
        let encoded = serde_json::to_string(&encode_node(&node).unwrap()).unwrap();
        assert!(encoded.starts_with(r#"{"__typeName":"BoldModifier""#));
    }
}
