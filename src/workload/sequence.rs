use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use fs2::FileExt;

use super::operation::Operation;
use crate::error::Result;

/// Opens a workload file for reading, holding a shared lock until the reader is dropped
pub fn open_shared(path: &Path) -> Result<BufReader<File>> {
    let file = OpenOptions::new().read(true).open(path)?;
    file.lock_shared()?;
    Ok(BufReader::new(file))
}

/// Loads every well-formed operation of a workload file, skipping the rest
pub fn load_sequence(path: &Path) -> Result<Vec<Operation>> {
    let reader = open_shared(path)?;

    let mut ops = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match Operation::parse_line(&line) {
            Some(op) => ops.push(op),
            None => trace!("Skipping workload line {:?} in {}", line, path.display()),
        }
    }

    Ok(ops)
}

/// Writes a sequence one operation per line, replacing the file's content
pub fn save_sequence(path: &Path, ops: &[Operation]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(path)?;
    file.lock_exclusive()?;
    file.set_len(0)?;

    let mut out = BufWriter::new(&file);
    for op in ops {
        writeln!(out, "{}", op)?;
    }
    out.flush()?;
    drop(out);

    file.unlock()?;
    debug!("Wrote {} operations to {}", ops.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn saved_sequence_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        let ops = vec![
            Operation::Write(0, 1),
            Operation::Read(2),
            Operation::Serialize,
        ];

        save_sequence(&path, &ops).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "write 0 1\nread 2\nstring\n"
        );
        assert_eq!(load_sequence(&path).unwrap(), ops);
    }

    #[test]
    fn saving_replaces_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        fs::write(&path, "read 0\nread 0\nread 0\nread 0\n").unwrap();

        save_sequence(&path, &[Operation::Serialize]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "string\n");
    }

    #[test]
    fn junk_lines_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ops.txt");
        fs::write(&path, "read 0\n# comment\n\nwrite 1\nwrite 1 4\nflush\nstring").unwrap();

        assert_eq!(
            load_sequence(&path).unwrap(),
            vec![Operation::Read(0), Operation::Write(1, 4), Operation::Serialize]
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sequence(&dir.path().join("absent.txt")).is_err());
    }
}
