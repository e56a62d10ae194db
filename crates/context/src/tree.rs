use repobrief_scanner::FileRecord;

/// Most file entries rendered for any single directory; later files at
/// the same level are silently omitted.
const MAX_FILES_PER_DIR: usize = 50;

/// Render a bounded textual tree of the project structure.
///
/// Paths are split into segments and inserted into a prefix tree that
/// preserves first-encounter order. Rendering is depth-first with
/// directories before files at each level, two spaces of indentation per
/// depth, and directory lines suffixed with `/`.
pub fn render_structure(records: &[FileRecord]) -> String {
    let mut root = TreeNode::default();
    for record in records {
        root.insert(&record.segments().collect::<Vec<_>>());
    }

    let mut output = String::new();
    root.render(&mut output, 0);
    output
}

#[derive(Default)]
struct TreeNode {
    dirs: Vec<(String, TreeNode)>,
    files: Vec<String>,
}

impl TreeNode {
    fn insert(&mut self, segments: &[&str]) {
        match segments {
            [] => {}
            [file] => self.files.push((*file).to_string()),
            [dir, rest @ ..] => {
                let index = match self.dirs.iter().position(|(name, _)| name == dir) {
                    Some(index) => index,
                    None => {
                        self.dirs.push(((*dir).to_string(), TreeNode::default()));
                        self.dirs.len() - 1
                    }
                };
                self.dirs[index].1.insert(rest);
            }
        }
    }

    fn render(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        for (name, child) in &self.dirs {
            output.push_str(&indent);
            output.push_str(name);
            output.push_str("/\n");
            child.render(output, depth + 1);
        }
        for file in self.files.iter().take(MAX_FILES_PER_DIR) {
            output.push_str(&indent);
            output.push_str(file);
            output.push('\n');
        }
    }
}
