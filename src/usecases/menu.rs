//! Menu - Interactive Console Shell
//!
//! Numbered menu over the gradebook registry:
//! 1. Add a student with per-subject grades
//! 2. Delete a student by number
//! 3. Display every student with per-subject averages
//! 4. Save and exit
//!
//! Reads from any `AsyncBufRead` and writes to any `AsyncWrite`, so the
//! binary drives it with stdin/stdout and tests with byte buffers.
//! End of input behaves like choosing Exit.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::domain::{Student, StudentNumber};
use crate::ports::store::StudentStore;
use crate::usecases::gradebook::Gradebook;

/// Typing this at the subject prompt finishes a new student.
const DONE: &str = "done";

/// Whether the menu loop keeps going after an action.
enum Flow {
  Continue,
  Exit,
}

/// Console shell bound to an input and an output stream.
pub struct Menu<R, W> {
  input: R,
  output: W,
}

impl<R, W> Menu<R, W>
where
  R: AsyncBufRead + Unpin,
  W: AsyncWrite + Unpin,
{
  pub const fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Give back the output stream (tests inspect what was written).
  pub fn into_output(self) -> W {
    self.output
  }

  /// Run until the user exits or input ends. The registry is saved on the way out.
  ///
  /// Only console I/O errors are returned; persistence failures are
  /// reported to the user and the loop carries on.
  pub async fn run<S: StudentStore>(&mut self, book: &mut Gradebook<S>) -> io::Result<()> {
    if let Some(e) = book.load_error() {
      let msg = if e.is_not_found() {
        format!("No student file at {} yet, starting empty.", book.location())
      } else {
        format!("Error reading student file {}: {e}", book.location())
      };
      self.say(&msg).await?;
    }

    loop {
      self.say("Welcome to Student Database").await?;
      self.say("1. Add student").await?;
      self.say("2. Delete student").await?;
      self.say("3. Display students").await?;
      self.say("4. Exit").await?;

      let Some(choice) = self.prompt("Enter your choice: ").await? else {
        return self.exit(book).await;
      };

      let flow = match choice.trim().parse::<u32>() {
        Ok(1) => self.add_student(book).await?,
        Ok(2) => self.delete_student(book).await?,
        Ok(3) => {
          self.display_students(book).await?;
          Flow::Continue
        }
        Ok(4) => Flow::Exit,
        Ok(_) => {
          self
            .say("Invalid choice. Please enter a number between 1 and 4.")
            .await?;
          Flow::Continue
        }
        Err(_) => {
          self.say("Invalid input. Please enter a number.").await?;
          Flow::Continue
        }
      };

      if let Flow::Exit = flow {
        return self.exit(book).await;
      }
    }
  }

  async fn add_student<S: StudentStore>(&mut self, book: &mut Gradebook<S>) -> io::Result<Flow> {
    let Some(name) = self.prompt("Enter student name: ").await? else {
      return Ok(Flow::Exit);
    };
    let mut student = Student::new(name);

    loop {
      let Some(subject) = self
        .prompt("Enter subject name (or type 'done' to finish): ")
        .await?
      else {
        return Ok(Flow::Exit);
      };
      if subject.trim().eq_ignore_ascii_case(DONE) {
        break;
      }
      let Some(grade) = self.prompt_grade(&subject).await? else {
        return Ok(Flow::Exit);
      };
      student.add_grade(subject, grade);
    }

    let Some(id) = self
      .prompt_number("Enter student number (6 digit number): ")
      .await?
    else {
      return Ok(Flow::Exit);
    };

    debug!(id, name = %student.name(), replaced = book.registry().contains(id), "Adding student");
    book.registry_mut().add(id, student);
    self.say("Student added successfully.").await?;
    Ok(Flow::Continue)
  }

  async fn delete_student<S: StudentStore>(&mut self, book: &mut Gradebook<S>) -> io::Result<Flow> {
    let Some(id) = self.prompt_number("Enter student number to delete: ").await? else {
      return Ok(Flow::Exit);
    };

    if book.registry_mut().remove(id) {
      debug!(id, "Student deleted");
      self.say("Student deleted successfully.").await?;
    } else {
      self.say("Student not found.").await?;
    }
    Ok(Flow::Continue)
  }

  async fn display_students<S: StudentStore>(&mut self, book: &Gradebook<S>) -> io::Result<()> {
    self.say("\n\nDisplaying all students:\n").await?;

    let mut text = String::new();
    for (id, student) in book.registry().iter() {
      text.push_str(&format!("Student Number: {id}\n"));
      for subject in student.subjects() {
        // Debug keeps the fractional part, so 90 shows as 90.0.
        let average = student.average_grade(subject);
        text.push_str(&format!("Subject: {subject}, Average Grade: {average:?}\n"));
      }
    }
    self.output.write_all(text.as_bytes()).await?;
    self.output.flush().await
  }

  async fn exit<S: StudentStore>(&mut self, book: &Gradebook<S>) -> io::Result<()> {
    if let Err(e) = book.save().await {
      let msg = format!("Error writing student file {}: {e}", book.location());
      self.say(&msg).await?;
    }
    self.say("Exiting...").await
  }

  /// Ask for a finite grade until one parses. `None` at end of input.
  async fn prompt_grade(&mut self, subject: &str) -> io::Result<Option<f64>> {
    let question = format!("Enter grade for {subject}: ");
    loop {
      let Some(answer) = self.prompt(&question).await? else {
        return Ok(None);
      };
      match answer.trim().parse::<f64>() {
        Ok(grade) if grade.is_finite() => return Ok(Some(grade)),
        _ => self.say("Invalid grade. Please enter a number.").await?,
      }
    }
  }

  /// Ask for a student number until one parses. `None` at end of input.
  async fn prompt_number(&mut self, question: &str) -> io::Result<Option<StudentNumber>> {
    loop {
      let Some(answer) = self.prompt(question).await? else {
        return Ok(None);
      };
      match answer.trim().parse::<StudentNumber>() {
        Ok(id) => return Ok(Some(id)),
        Err(_) => {
          self
            .say("Invalid student number. Please enter a number.")
            .await?;
        }
      }
    }
  }

  /// Print `question` without a newline and read one line of input.
  async fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
    self.output.write_all(question.as_bytes()).await?;
    self.output.flush().await?;

    let mut line = String::new();
    if self.input.read_line(&mut line).await? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
  }

  async fn say(&mut self, text: &str) -> io::Result<()> {
    self.output.write_all(text.as_bytes()).await?;
    self.output.write_all(b"\n").await?;
    self.output.flush().await
  }
}
