//! Student Codec - JSON Lines Record Format
//!
//! One student per line, each line a self-contained JSON object:
//!
//! ```text
//! {"name":"Ada","grades":{"Math":[90.0,95.0]}}
//! ```
//!
//! Subject order and grade order on the wire equal the in-memory
//! insertion order in both directions. The codec holds no state between
//! calls; `load_all` and `save_all` are single passes over a line
//! source or sink.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{GradeMap, Registry, Student, StudentNumber};
use crate::error::{MalformedRecord, PersistenceError};
use crate::ports::lines::{LineSink, LineSource};

/// Borrowed view used for encoding, so no grade list is cloned.
#[derive(Serialize)]
struct RecordRef<'a> {
    name: &'a str,
    grades: &'a GradeMap,
}

/// Owned wire record. Unknown extra fields are ignored.
#[derive(Deserialize)]
struct Record {
    name: String,
    grades: GradeMap,
}

/// Serialize a student into one JSON line (no terminator).
///
/// Fails on a NaN or infinite grade: JSON would carry it as `null`,
/// which can never be decoded back.
pub fn encode(student: &Student) -> Result<String, MalformedRecord> {
    for (subject, grades) in student.grades() {
        if let Some(&grade) = grades.iter().find(|g| !g.is_finite()) {
            return Err(MalformedRecord::NonFiniteGrade {
                subject: subject.clone(),
                grade,
            });
        }
    }
    let record = RecordRef {
        name: student.name(),
        grades: student.grades(),
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parse one JSON line into a student.
///
/// Each subject's array becomes that subject's grade list in array
/// order. An empty array is kept as an empty subject.
pub fn decode(line: &str) -> Result<Student, MalformedRecord> {
    let record: Record = serde_json::from_str(line)?;
    let mut student = Student::new(record.name);
    for (subject, grades) in record.grades {
        student.replace_grades(subject, grades);
    }
    Ok(student)
}

/// Read every line from `source` into a fresh registry.
///
/// Records are numbered 1, 2, 3, … in read order; numbers used when the
/// data was saved are not stored and therefore not restored. Blank lines
/// are skipped. The first malformed line aborts the whole load and no
/// registry is returned.
pub fn load_all<S: LineSource + ?Sized>(source: &mut S) -> Result<Registry, PersistenceError> {
    let mut registry = Registry::new();
    let mut next_id: StudentNumber = 1;
    let mut line_no = 0usize;

    while let Some(bytes) = source.next_line()? {
        line_no += 1;
        let malformed = |source| PersistenceError::MalformedRecord {
            line: line_no,
            source,
        };
        let line = String::from_utf8(bytes).map_err(|e| malformed(e.into()))?;
        if line.trim().is_empty() {
            continue;
        }
        let student = decode(&line).map_err(malformed)?;
        debug!(id = next_id, line = line_no, name = %student.name(), "Decoded student record");
        registry.add(next_id, student);
        next_id += 1;
    }

    Ok(registry)
}

/// Write one encoded line per record in the registry's enumeration order.
///
/// Every record is encoded before the first line is written, so a record
/// that cannot be encoded leaves the sink untouched. An empty registry
/// writes nothing.
pub fn save_all<S: LineSink + ?Sized>(registry: &Registry, sink: &mut S) -> Result<(), PersistenceError> {
    let lines = registry
        .iter()
        .enumerate()
        .map(|(i, (_, student))| {
            encode(student).map_err(|source| PersistenceError::MalformedRecord {
                line: i + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for line in &lines {
        sink.write_line(line)?;
    }
    Ok(())
}
