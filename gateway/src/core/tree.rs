//! Directory hierarchy model and box-drawing text renderer.

const TEE: &str = "├── ";
const CORNER: &str = "└── ";
const GUIDE: &str = "│   ";
const BLANK: &str = "    ";

/// One entry of a directory hierarchy, rebuilt per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    /// Children in enumeration order.
    Dir(Vec<TreeNode>),
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    pub fn dir(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Dir(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir(_))
    }

    pub fn children(&self) -> &[TreeNode] {
        match &self.kind {
            NodeKind::Dir(children) => children,
            NodeKind::File => &[],
        }
    }
}

/// Render `root` and its descendants.
///
/// The root's name is printed first as `name/`. Entries of the root sit at
/// nesting level 1; with `max_depth = Some(d)`, directories at level `>= d`
/// are drawn closed. At every level directories come before files, each
/// group keeping its enumeration order.
pub fn render(root: &TreeNode, max_depth: Option<usize>) -> String {
    let label = root.name.trim_end_matches('/');
    let mut out = format!("{label}/\n");
    render_level(root.children(), "", 1, max_depth, &mut out);
    out.trim_end().to_string()
}

fn render_level(
    entries: &[TreeNode],
    prefix: &str,
    level: usize,
    max_depth: Option<usize>,
    out: &mut String,
) {
    let mut ordered: Vec<&TreeNode> = entries.iter().collect();
    ordered.sort_by_key(|node| !node.is_dir());

    let last = ordered.len().saturating_sub(1);
    for (index, node) in ordered.into_iter().enumerate() {
        let is_last = index == last;
        out.push_str(prefix);
        out.push_str(if is_last { CORNER } else { TEE });
        out.push_str(&node.name);

        let NodeKind::Dir(children) = &node.kind else {
            out.push('\n');
            continue;
        };
        out.push_str("/\n");
        if max_depth.is_some_and(|depth| level >= depth) {
            continue;
        }
        let nested = format!("{prefix}{}", if is_last { BLANK } else { GUIDE });
        render_level(children, &nested, level + 1, max_depth, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::dir(
            "/work/repo",
            vec![
                TreeNode::dir(
                    "project1",
                    vec![
                        TreeNode::file("README.md"),
                        TreeNode::dir(
                            "src",
                            vec![TreeNode::file("main.rs"), TreeNode::file("helper.rs")],
                        ),
                        TreeNode::dir("tests", vec![TreeNode::file("smoke.rs")]),
                    ],
                ),
                TreeNode::file("notes.txt"),
                TreeNode::dir("project2", vec![TreeNode::file("config.json")]),
            ],
        )
    }

    #[test]
    fn renders_full_hierarchy_with_guides() {
        let expected = "\
/work/repo/
├── project1/
│   ├── src/
│   │   ├── main.rs
│   │   └── helper.rs
│   ├── tests/
│   │   └── smoke.rs
│   └── README.md
├── project2/
│   └── config.json
└── notes.txt";
        assert_eq!(render(&sample(), None), expected);
    }

    #[test]
    fn directories_precede_files_regardless_of_insertion_order() {
        let root = TreeNode::dir(
            "root",
            vec![TreeNode::file("a.txt"), TreeNode::dir("sub", Vec::new())],
        );
        assert_eq!(render(&root, None), "root/\n├── sub/\n└── a.txt");
    }

    #[test]
    fn depth_one_closes_first_level_directories() {
        let expected = "\
/work/repo/
├── project1/
├── project2/
└── notes.txt";
        assert_eq!(render(&sample(), Some(1)), expected);
    }

    #[test]
    fn depth_zero_behaves_like_depth_one() {
        let expected = "\
/work/repo/
├── project1/
├── project2/
└── notes.txt";
        assert_eq!(render(&sample(), Some(0)), expected);
        assert_eq!(render(&sample(), Some(0)), render(&sample(), Some(1)));
    }

    #[test]
    fn depth_two_closes_second_level_directories() {
        let expected = "\
/work/repo/
├── project1/
│   ├── src/
│   ├── tests/
│   └── README.md
├── project2/
│   └── config.json
└── notes.txt";
        assert_eq!(render(&sample(), Some(2)), expected);
    }

    #[test]
    fn repeated_renders_are_identical() {
        let tree = sample();
        assert_eq!(render(&tree, None), render(&tree, None));
    }

    #[test]
    fn empty_root_and_trailing_separator() {
        assert_eq!(render(&TreeNode::dir("/tmp/x/", Vec::new()), None), "/tmp/x/");
        assert_eq!(render(&TreeNode::dir("/", Vec::new()), None), "/");
    }

    #[test]
    fn last_directory_pads_with_blanks() {
        let root = TreeNode::dir(
            "r",
            vec![TreeNode::dir("only", vec![TreeNode::file("f")])],
        );
        assert_eq!(render(&root, None), "r/\n└── only/\n    └── f");
    }
}
