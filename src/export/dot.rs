//! DOT source generation for graph output.
//!
//! The outline is serialized into Graphviz DOT: box-shaped filled nodes
//! with the ordinary colour as the default, explicit fill overrides for
//! root and undefined nodes, and one edge line per outline edge.

use crate::config::ColourScheme;
use crate::graph::{GraphOutline, Role};

/// Graphviz X11 colour names accepted for node fills, sorted.
const COLOUR_NAMES: &[&str] = &[
    "aliceblue",
    "aquamarine",
    "azure",
    "beige",
    "bisque",
    "black",
    "blue",
    "blueviolet",
    "brown",
    "burlywood",
    "cadetblue",
    "chartreuse",
    "chocolate",
    "coral",
    "cornflowerblue",
    "cornsilk",
    "crimson",
    "cyan",
    "darkgreen",
    "darkorange",
    "darksalmon",
    "darkseagreen",
    "darkslateblue",
    "darkslategray",
    "darkturquoise",
    "darkviolet",
    "deeppink",
    "deepskyblue",
    "dimgray",
    "dodgerblue",
    "firebrick",
    "forestgreen",
    "gainsboro",
    "gold",
    "goldenrod",
    "gray",
    "green",
    "greenyellow",
    "honeydew",
    "hotpink",
    "indianred",
    "indigo",
    "ivory",
    "khaki",
    "lavender",
    "lightblue",
    "lightcoral",
    "lightcyan",
    "lightgoldenrod",
    "lightgray",
    "lightgreen",
    "lightpink",
    "lightsalmon",
    "lightseagreen",
    "lightskyblue",
    "lightyellow",
    "limegreen",
    "magenta",
    "maroon",
    "mediumaquamarine",
    "mediumblue",
    "mediumorchid",
    "mediumpurple",
    "mediumseagreen",
    "mediumspringgreen",
    "mediumturquoise",
    "mistyrose",
    "navajowhite",
    "navy",
    "olivedrab",
    "orange",
    "orangered",
    "orchid",
    "palegoldenrod",
    "palegreen",
    "paleturquoise",
    "peachpuff",
    "peru",
    "pink",
    "plum",
    "powderblue",
    "purple",
    "red",
    "rosybrown",
    "royalblue",
    "saddlebrown",
    "salmon",
    "sandybrown",
    "seagreen",
    "seashell",
    "sienna",
    "skyblue",
    "slateblue",
    "slategray",
    "snow",
    "springgreen",
    "steelblue",
    "tan",
    "thistle",
    "tomato",
    "turquoise",
    "violet",
    "wheat",
    "white",
    "whitesmoke",
    "yellow",
    "yellowgreen",
];

/// Returns the accepted node-fill colour names in sorted order.
pub fn colour_names() -> &'static [&'static str] {
    COLOUR_NAMES
}

/// Renders the outline as DOT source.
///
/// Nodes are declared in outline order, then edges in outline order.
/// Normal nodes inherit the default fill; root and undefined nodes carry
/// an explicit `fillcolor`.
///
/// # Example
///
/// ```rust
/// use modscope::config::ColourScheme;
/// use modscope::export::to_dot;
/// use modscope::graph::{GraphOutline, Role};
///
/// let mut outline = GraphOutline::new();
/// outline.add_node("Top", Role::Normal);
/// outline.add_node("Base", Role::Root);
/// outline.add_edge("Top", "Base");
///
/// let dot = to_dot(&outline, &ColourScheme::default());
/// assert!(dot.contains(r#""Base" [fillcolor="forestgreen"];"#));
/// assert!(dot.contains(r#""Top" -> "Base";"#));
/// ```
pub fn to_dot(outline: &GraphOutline, colours: &ColourScheme) -> String {
    let mut dot = String::from("digraph modscope {\n");
    dot.push_str(&format!(
        "    node [shape=box, style=filled, fillcolor=\"{}\"];\n",
        colours.node
    ));

    for node in outline.nodes() {
        match node.role {
            Role::Root => dot.push_str(&format!(
                "    \"{}\" [fillcolor=\"{}\"];\n",
                escape(&node.name),
                colours.root
            )),
            Role::Undefined => dot.push_str(&format!(
                "    \"{}\" [fillcolor=\"{}\"];\n",
                escape(&node.name),
                colours.undefined
            )),
            Role::Normal => dot.push_str(&format!("    \"{}\";\n", escape(&node.name))),
        }
    }

    for (from, to) in outline.edges() {
        dot.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape(from),
            escape(to)
        ));
    }

    dot.push_str("}\n");
    dot
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
