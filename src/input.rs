use crate::options::Options;
use crate::output::{exit, status};
use log::{debug, error};
use memmap::Mmap;
use prioq::script::{self, Command};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

fn read_stdin() -> Box<[u8]> {
    let mut buffer = vec![];
    io::stdin()
        .read_to_end(&mut buffer)
        .unwrap_or_else(|err| {
            error!("reading stdin: {}", err);
            status::os_error("<stdin>", &err);
            exit::failure()
        });
    buffer.into_boxed_slice()
}

// zero-length files cannot be mapped
fn map_file(path: &Path) -> io::Result<Option<Mmap>> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }
    let map = unsafe { Mmap::map(&file)? };
    Ok(Some(map))
}

fn parse(name: &str, bytes: &[u8]) -> Vec<Command> {
    debug!("parsing {} bytes from {}", bytes.len(), name);
    script::parse(bytes).unwrap_or_else(|err| {
        error!("{}", err);
        status::input_error(name, &err);
        exit::failure()
    })
}

pub(crate) fn load_script(options: &Options) -> Vec<Command> {
    let name = options.script_name();
    if let Some(path) = &options.path {
        let map = map_file(path).unwrap_or_else(|err| {
            error!("reading {}: {}", name, err);
            status::os_error(&name, &err);
            exit::failure()
        });
        parse(&name, map.as_deref().unwrap_or_default())
    } else {
        parse(&name, &read_stdin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn empty_file_is_not_mapped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        File::create(&path).unwrap();
        assert!(map_file(&path).unwrap().is_none());
    }

    #[test]
    fn maps_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("script.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"enqueue 1 a\ndequeue\n").unwrap();
        drop(file);
        let map = map_file(&path).unwrap().unwrap();
        assert_eq!(&map[..], b"enqueue 1 a\ndequeue\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let error = map_file(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
