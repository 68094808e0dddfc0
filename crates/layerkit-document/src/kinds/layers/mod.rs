mod content;
mod controls;
mod data;

pub use content::{
    HStackLayer, ImageLayer, RoundedRectangleLayer, ScrollViewLayer, SpacerLayer, TextLayer,
    VStackLayer, ZStackLayer,
};
pub use controls::{ButtonLayer, SecureFieldLayer, StepperLayer, TextFieldLayer, ToggleLayer};
pub use data::{CollectionLayer, ConditionalLayer, DataRequest, DataSourceLayer, HttpHeader};
