use kaizen_canvas::{CanvasBuilder, Connection, NodeDataPatch, NodeType, PipelineModel, Position, analysis};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut editor = CanvasBuilder::new().enforce_handle_rules(true).build().unwrap();

    editor.channel().on_history(|can_undo, can_redo| {
        println!("history: can_undo={}, can_redo={}", can_undo, can_redo);
    });

    let text = include_str!("./pipeline.json");
    let pipeline = PipelineModel::from_json(text).unwrap();
    editor.load_pipeline(&pipeline);

    // insert a synthesizer between the specialists and the reply
    let merge = editor.create_node(NodeType::Synthesizer, Position::new(560.0, 120.0));
    editor.update_node(&merge, NodeDataPatch::label("Merge answers"));
    editor.remove_edge("c4");
    editor.remove_edge("c5");
    editor.connect(Connection::new("billing", merge.as_str()));
    editor.connect(Connection::new("technical", merge.as_str()));
    editor.connect(Connection::new(merge.as_str(), "reply"));

    // rejected: inputs have no incoming handle
    if editor.connect(Connection::new("reply", "ticket")).is_none() {
        println!("connection reply -> ticket rejected");
    }

    println!("{}", analysis::describe(&editor.snapshot()));

    editor.undo();
    println!("after undo: {} edges", editor.edges().len());
    editor.redo();

    for issue in analysis::validate(&editor.snapshot()) {
        println!("issue: {}", issue);
    }

    let saved = editor.to_pipeline(&pipeline.id, &pipeline.name);
    println!("{}", saved.to_json().unwrap());
}
