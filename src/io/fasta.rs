use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::alphabet::Alphabet;
use crate::container::SequenceSet;
use crate::seq::Sequence;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: String,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        // Find header line
        let header = if let Some(h) = self.peek_header.take() {
            h
        } else {
            loop {
                self.buf.clear();
                let n = self.reader.read_line(&mut self.buf)?;
                if n == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if self.buf.starts_with('>') {
                    let h = self.buf[1..].trim().to_string();
                    break h;
                }
            }
        };

        // Parse id and description
        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Read sequence lines
        let mut seq = String::new();
        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                break;
            }
            if self.buf.starts_with('>') {
                let h = self.buf[1..].trim().to_string();
                self.peek_header = Some(h);
                break;
            }
            for ch in self.buf.chars() {
                if !ch.is_whitespace() {
                    seq.push(ch.to_ascii_uppercase());
                }
            }
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

/// FASTA 写出器，序列行按固定列宽折行
pub struct FastaWriter<W: Write> {
    writer: W,
    line_width: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_width: 60,
        }
    }

    pub fn with_line_width(writer: W, line_width: usize) -> Self {
        Self {
            writer,
            line_width: line_width.max(1),
        }
    }

    pub fn write_record(&mut self, record: &FastaRecord) -> Result<()> {
        match &record.desc {
            Some(desc) => writeln!(self.writer, ">{} {}", record.id, desc)?,
            None => writeln!(self.writer, ">{}", record.id)?,
        }
        let chars: Vec<char> = record.seq.chars().collect();
        for chunk in chars.chunks(self.line_width) {
            let line: String = chunk.iter().collect();
            writeln!(self.writer, "{line}")?;
        }
        Ok(())
    }

    /// 名称作为 id，注释作为描述，序列按字母表规范写法输出
    pub fn write_sequence(&mut self, seq: &Sequence) -> Result<()> {
        let record = FastaRecord {
            id: seq.name().to_string(),
            desc: seq.comment().map(str::to_string),
            seq: seq.to_string(),
        };
        self.write_record(&record)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// 读入全部 FASTA 记录并按给定字母表解析为序列集
pub fn read_sequence_set<R: BufRead>(reader: R, alphabet: Alphabet) -> Result<SequenceSet> {
    let mut fasta = FastaReader::new(reader);
    let mut set = SequenceSet::new(alphabet.clone());
    while let Some(record) = fasta.next_record()? {
        let seq = Sequence::new(record.id.as_str(), &record.seq, alphabet.clone())
            .with_context(|| format!("record '{}'", record.id))?;
        let seq = match &record.desc {
            Some(desc) => seq.with_comment(desc.clone()),
            None => seq,
        };
        set.add(seq)?;
    }
    Ok(set)
}

/// 将序列集写出为 FASTA
pub fn write_sequence_set<W: Write>(writer: W, set: &SequenceSet) -> Result<()> {
    let mut fasta = FastaWriter::new(writer);
    for seq in set.iter() {
        fasta.write_sequence(seq)?;
    }
    fasta.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_simple_fasta() {
        let data = b">chr1 first\nACgTNN\n>chr2\nAAA\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("first"));
        assert_eq!(r1.seq, "ACGTNN");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, "AAA");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">chr1 desc\r\nAC g t n\r\n acgt\r\n>chr2 \r\n N N N \r\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc.as_deref(), Some("desc"));
        assert_eq!(r1.seq, "ACGTNACGT");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "chr2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, "NNN");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_empty_lines() {
        let data = b"\n\n>chr1\nACGT\n";
        let cursor = Cursor::new(&data[..]);
        let mut r = FastaReader::new(cursor);

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "chr1");
        assert_eq!(r1.desc, None);
        assert_eq!(r1.seq, "ACGT");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn write_records_wrap_at_line_width() {
        let mut w = FastaWriter::with_line_width(Vec::new(), 4);
        w.write_record(&FastaRecord {
            id: "chr1".to_string(),
            desc: Some("first".to_string()),
            seq: "ACGTACGTAC".to_string(),
        })
        .unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(out, ">chr1 first\nACGT\nACGT\nAC\n");
    }

    #[test]
    fn sequence_set_roundtrip() {
        let dna = Alphabet::dna();
        let mut set = SequenceSet::new(dna.clone());
        set.add(
            Sequence::new("s1", "GATTACA", dna.clone())
                .unwrap()
                .with_comment("sample"),
        )
        .unwrap();
        set.add(Sequence::new("s2", "ACGTN-", dna.clone()).unwrap())
            .unwrap();

        let mut buf = Vec::new();
        write_sequence_set(&mut buf, &set).unwrap();

        let parsed = read_sequence_set(Cursor::new(buf), dna).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get(0).unwrap().to_string(), "GATTACA");
        assert_eq!(parsed.get(0).unwrap().comment(), Some("sample"));
        assert_eq!(parsed.get(1).unwrap().name(), "s2");
        assert_eq!(parsed.get(1).unwrap().to_string(), "ACGTN-");
    }

    #[test]
    fn read_sequence_set_rejects_invalid_symbol() {
        let data = b">s1\nACGX\n";
        let err = read_sequence_set(Cursor::new(&data[..]), Alphabet::dna()).unwrap_err();
        assert!(format!("{err:#}").contains("record 's1'"));
    }
}
