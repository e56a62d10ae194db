use repobrief_scanner::FileRecord;

/// Read-only view over the file records a classification rule inspects.
///
/// Rules only ever ask about filenames, paths, and extensions, so the
/// summary borrows the record list and answers those queries directly.
pub struct Evidence<'a> {
    records: &'a [FileRecord],
}

impl<'a> Evidence<'a> {
    pub fn new(records: &'a [FileRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'a [FileRecord] {
        self.records
    }

    /// Exact filename present anywhere in the tree
    pub fn has_filename(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.filename == name)
    }

    /// Any filename containing the fragment
    pub fn any_filename_contains(&self, fragment: &str) -> bool {
        self.records.iter().any(|r| r.filename.contains(fragment))
    }

    /// Any path containing the fragment (raw substring, matching the
    /// loose checks the rules were tuned against)
    pub fn any_path_contains(&self, fragment: &str) -> bool {
        self.records.iter().any(|r| r.path.contains(fragment))
    }

    /// First record whose path ends with the suffix, in traversal order
    pub fn find_path_suffix(&self, suffix: &str) -> Option<&'a FileRecord> {
        self.records.iter().find(|r| r.path.ends_with(suffix))
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        self.records.iter().any(|r| r.extension == ext)
    }

    /// Most frequent non-empty extension across all records.
    ///
    /// Strictly-greater comparison only: the first extension to reach a
    /// new maximum wins, so ties go to the earliest-counted extension.
    pub fn most_common_extension(&self) -> Option<&'a str> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut max = 0usize;
        let mut most_common = None;

        for record in self.records {
            if record.extension.is_empty() {
                continue;
            }
            let ext = record.extension.as_str();
            let count = match counts.iter().position(|(seen, _)| *seen == ext) {
                Some(index) => {
                    counts[index].1 += 1;
                    counts[index].1
                }
                None => {
                    counts.push((ext, 1));
                    1
                }
            };
            if count > max {
                max = count;
                most_common = Some(ext);
            }
        }

        most_common
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use repobrief_scanner::FileRecord;
    use std::path::PathBuf;

    fn record(path: &str) -> FileRecord {
        FileRecord::new(&PathBuf::from(path), 1)
    }

    #[test]
    fn frequency_prefers_strictly_greater_counts() {
        let records = vec![record("a.md"), record("b.md"), record("c.txt")];
        let evidence = Evidence::new(&records);
        assert_eq!(evidence.most_common_extension(), Some(".md"));
    }

    #[test]
    fn frequency_tie_goes_to_first_seen() {
        let records = vec![
            record("a.txt"),
            record("b.md"),
            record("c.txt"),
            record("d.md"),
        ];
        let evidence = Evidence::new(&records);
        // .txt reaches each new maximum first
        assert_eq!(evidence.most_common_extension(), Some(".txt"));
    }

    #[test]
    fn frequency_ignores_extensionless_files() {
        let records = vec![record("Makefile"), record("LICENSE")];
        let evidence = Evidence::new(&records);
        assert_eq!(evidence.most_common_extension(), None);
    }
}
