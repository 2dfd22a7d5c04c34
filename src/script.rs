//! Parser for provisioning scripts.
//!
//! A script is a list of parted commands, one per line. Lines which create a
//! primary or logical partition may carry file system metadata in a trailing
//! comment:
//!
//! ```text
//! mklabel msdos
//! mkpart primary fat32 4MiB 256MiB   # label=BOOT mount=boot
//! mkpart primary ext4 256MiB 100%    # label=root reserved=1 mount=/
//! ```

use disk_types::{ByteSize, ByteSizeError, PartitionSpec, PartitionType};
use std::str::FromStr;

/// The end offset which extends a partition to the end of the device.
const END_OF_DEVICE: &str = "100%";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(display = "line {}: too short mkpart command: {}", _0, _1)]
    ShortMkpart(usize, Box<str>),
    #[error(display = "line {}: invalid {} offset of partition {}", _0, _1, _2)]
    Offset(usize, &'static str, u32, #[error(source)] ByteSizeError),
}

/// One non-empty line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine<'a> {
    /// 1-based line number within the script.
    pub number:   usize,
    /// Whitespace-separated words preceding the comment marker.
    pub words:    Vec<&'a str>,
    /// Text following the comment marker.
    pub metadata: &'a str,
}

/// What a script line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Creates a partition which may receive a file system.
    Partition(PartitionType),
    /// Any other parted command.
    Passthrough,
}

impl<'a> ScriptLine<'a> {
    pub fn directive(&self) -> Directive {
        if !self.words.contains(&"mkpart") {
            return Directive::Passthrough;
        }

        if self.words.contains(&"primary") {
            Directive::Partition(PartitionType::Primary)
        } else if self.words.contains(&"logical") {
            Directive::Partition(PartitionType::Logical)
        } else {
            Directive::Passthrough
        }
    }

    /// Value of the `key=value` pair named `key` in the metadata, if it was given.
    ///
    /// Later pairs override earlier ones. Empty values are treated as absent.
    pub fn meta(&self, key: &str) -> Option<&'a str> {
        self.metadata
            .split_whitespace()
            .filter_map(meta_pair)
            .filter(|(name, _)| *name == key)
            .map(|(_, value)| value)
            .last()
    }
}

fn is_word(c: char) -> bool { c.is_alphanumeric() || c == '_' }

/// Finds the first `name=value` pair within a whitespace-free token. The name is the
/// run of word characters before an `=`, and the value is everything after it.
fn meta_pair(token: &str) -> Option<(&str, &str)> {
    token.match_indices('=').find_map(|(eq, _)| {
        let (head, value) = (&token[..eq], &token[eq + 1..]);
        let start = head
            .char_indices()
            .rev()
            .take_while(|&(_, c)| is_word(c))
            .last()
            .map(|(pos, _)| pos)?;
        if value.is_empty() {
            None
        } else {
            Some((&head[start..], value))
        }
    })
}

/// Splits a script into its non-empty lines.
///
/// Lines consisting solely of whitespace or of a comment carry no command, and are skipped.
pub fn tokenize(script: &str) -> Vec<ScriptLine> {
    script
        .lines()
        .enumerate()
        .filter_map(|(id, line)| {
            let (command, metadata) = line.split_once('#').unwrap_or((line, ""));
            let words: Vec<&str> = command.split_whitespace().collect();
            if words.is_empty() {
                None
            } else {
                Some(ScriptLine { number: id + 1, words, metadata })
            }
        })
        .collect()
}

/// Every line's words, in script order, for replaying against parted.
pub fn parted_commands(lines: &[ScriptLine]) -> Vec<Vec<String>> {
    lines.iter().map(|line| line.words.iter().map(|word| word.to_string()).collect()).collect()
}

/// Partitions declared by the script, numbered from 1 in the order they are declared.
pub fn partition_specs(lines: &[ScriptLine]) -> Result<Vec<PartitionSpec>, Error> {
    lines
        .iter()
        .filter_map(|line| match line.directive() {
            Directive::Partition(variant) => Some((line, variant)),
            Directive::Passthrough => None,
        })
        .zip(1..)
        .map(|((line, variant), number)| partition_spec(line, variant, number))
        .collect()
}

fn partition_spec(
    line: &ScriptLine,
    variant: PartitionType,
    number: u32,
) -> Result<PartitionSpec, Error> {
    if line.words.len() < 5 {
        return Err(Error::ShortMkpart(line.number, line.words.join(" ").into()));
    }

    let offset = |field: &'static str, token: &str| {
        token.parse::<ByteSize>().map_err(|why| Error::Offset(line.number, field, number, why))
    };

    let begin = offset("begin", line.words[3])?;
    let end = match line.words[4] {
        END_OF_DEVICE => ByteSize(0),
        token => offset("end", token)?,
    };

    Ok(PartitionSpec {
        number,
        variant,
        filesystem: line.words[2].into(),
        label: line.meta("label").map(Box::from),
        reserved: line.meta("reserved").map(Box::from),
        mount: line.meta("mount").map(Box::from),
        begin,
        end,
    })
}

/// A parsed provisioning script.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartitionTable {
    /// Words of every command line, to be handed to parted in order. Lines holding
    /// only a comment have no words, and are not included.
    pub commands:   Vec<Vec<String>>,
    pub partitions: Vec<PartitionSpec>,
}

impl FromStr for PartitionTable {
    type Err = Error;

    fn from_str(script: &str) -> Result<Self, Self::Err> {
        let lines = tokenize(script);
        let partitions = partition_specs(&lines)?;

        for partition in &partitions {
            debug!("parsed partition: {:?}", partition);
        }

        Ok(PartitionTable { commands: parted_commands(&lines), partitions })
    }
}
