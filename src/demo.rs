//! The string-operations walkthrough
//!
//! [`StringOpsDemo`] keeps one working string, applies a single primitive at a
//! time and reports every result on its own line, in call order. A hard
//! failure (`index` on a missing needle, an out-of-range element) stops the
//! run and is returned to the caller.

use crate::error::{Error, Result};
use crate::report::{Field, Reporter};
use crate::utils::{classify, pad, search, split, strip, transform, Range};
use std::io::Write;

type Section<W> = fn(&mut StringOpsDemo<W>) -> Result<()>;

/// Element `i` of `items`, or `IndexOutOfRange`
fn element<'a>(items: &[&'a str], i: usize) -> Result<&'a str> {
    items.get(i).copied().ok_or(Error::IndexOutOfRange {
        index: i,
        len: items.len(),
    })
}

/// Sequential demo over a single working string
pub struct StringOpsDemo<W: Write> {
    s: String,
    reporter: Reporter<W>,
}

impl<W: Write> StringOpsDemo<W> {
    pub fn new(reporter: Reporter<W>) -> Self {
        Self {
            s: String::new(),
            reporter,
        }
    }

    /// Current value of the working string
    pub fn current(&self) -> &str {
        &self.s
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }

    /// Run every section in order
    pub fn run(&mut self) -> Result<()> {
        let sections: [Section<W>; 8] = [
            Self::padding,
            Self::classification,
            Self::searching,
            Self::indexing,
            Self::case_and_layout,
            Self::stripping,
            Self::split_and_join,
            Self::lines,
        ];
        self.run_sections(&sections)?;

        log::debug!(
            "demo finished, {} lines written",
            self.reporter.lines_written()
        );
        Ok(())
    }

    /// Run `sections` in order, stopping at the first failure
    fn run_sections(&mut self, sections: &[Section<W>]) -> Result<()> {
        for section in sections {
            if let Err(e) = section(self) {
                log::debug!(
                    "section failed after {} lines: {}",
                    self.reporter.lines_written(),
                    e
                );
                return Err(e);
            }
        }
        Ok(())
    }

    fn set(&mut self, value: impl Into<String>) -> Result<()> {
        self.s = value.into();
        self.reporter.labeled("s", &self.s)
    }

    fn padding(&mut self) -> Result<()> {
        log::debug!("section: padding");
        let number = "1";
        self.reporter.line([Field::from(pad::zfill(number, 3))])
    }

    fn classification(&mut self) -> Result<()> {
        log::debug!("section: classification");
        self.s = "welcome to python".to_string();
        self.reporter.line([Field::from(&self.s)])?;
        let r = &mut self.reporter;
        r.labeled("s.isalnum()", classify::is_alnum(&self.s))?;
        r.labeled("s.isalpha()", classify::is_alpha(&self.s))?;
        r.labeled("\"2012\".isdigit()", classify::is_digit("2012"))?;
        r.labeled("s.islower()", classify::is_lower(&self.s))?;

        self.s = transform::upper(&self.s);
        let r = &mut self.reporter;
        r.labeled("s after s.upper()", &self.s)?;
        r.labeled("s.islower()", classify::is_lower(&self.s))?;
        r.labeled("s.isupper()", classify::is_upper(&self.s))?;
        r.labeled("\"WELCOME\".isupper()", classify::is_upper("WELCOME"))?;
        r.labeled("\"  \\t\".isspace()", classify::is_space("  \t"))
    }

    fn searching(&mut self) -> Result<()> {
        log::debug!("section: searching");
        self.set("welcome to python")?;
        let s = self.s.as_str();
        let r = &mut self.reporter;
        r.labeled("s.endswith(\"thon\")", search::ends_with(s, "thon"))?;
        r.labeled("s.startswith(\"good\")", search::starts_with(s, "good"))?;
        r.labeled("s.find(\"come\")", Field::position(search::find(s, "come")))?;
        r.labeled(
            "s.find(\"become\")",
            Field::position(search::find(s, "become")),
        )?;
        r.labeled("s.find(\"o\")", Field::position(search::find(s, "o")))?;
        r.labeled("s.rfind(\"o\")", Field::position(search::rfind(s, "o")))?;
        r.labeled("s.count(\"o\")", search::count(s, "o"))
    }

    fn indexing(&mut self) -> Result<()> {
        log::debug!("section: indexing");
        self.set("string in python")?;
        self.index_lookups()
    }

    fn index_lookups(&mut self) -> Result<()> {
        let s = self.s.as_str();
        let r = &mut self.reporter;
        r.labeled("s.capitalize()", transform::capitalize(s))?;
        r.labeled("s.index(\"n\")", search::index(s, "n")?)?;
        r.labeled("s.rindex(\"n\")", search::rindex(s, "n")?)
    }

    fn case_and_layout(&mut self) -> Result<()> {
        log::debug!("section: case and layout");
        self.set("This Is Test")?;
        let s = self.s.as_str();
        let r = &mut self.reporter;
        r.labeled("s.lower()", transform::lower(s))?;
        r.labeled("s.upper()", transform::upper(s))?;
        r.labeled("s.swapcase()", transform::swapcase(s))?;
        r.labeled("s.center(30)", pad::center(s, 30))?;

        let s6 = transform::replace(s, "Is", "Was");
        r.labeled("s6 after s6 = s.replace(\"Is\", \"Was\")", s6)?;
        r.labeled("s", s)
    }

    fn stripping(&mut self) -> Result<()> {
        log::debug!("section: stripping");
        self.set("This Is Test\n")?;
        let s1 = strip::strip(&self.s);
        self.reporter
            .line([Field::from("s1 = s.strip()"), Field::from(s1), Field::from(";")])?;

        self.set("    string in python   ")?;
        let s = self.s.as_str();
        let r = &mut self.reporter;
        r.labeled("s.rstrip()", strip::rstrip(s))?;
        r.labeled("s.lstrip()", strip::lstrip(s))?;

        self.s = strip::strip(&self.s).to_string();
        self.reporter.labeled("s after s.strip()", &self.s)
    }

    fn split_and_join(&mut self) -> Result<()> {
        log::debug!("section: split and join");
        let elements = split::split_whitespace(&self.s);
        let r = &mut self.reporter;
        r.labeled("elements = s.split()", Field::list(&elements))?;

        for i in Range::new(3) {
            let idx = usize::try_from(i).unwrap_or(usize::MAX);
            r.labeled("elements[i]", element(&elements, idx)?)?;
        }

        let newstring = split::join(" ", &elements);
        r.labeled("newstring = \" \".join(elements)", newstring)
    }

    fn lines(&mut self) -> Result<()> {
        log::debug!("section: lines");
        let lines = "hello\nmy name is\nMonty";
        let arr = split::split(lines, "\n")?;
        let r = &mut self.reporter;
        r.labeled("lines.split(\"\\n\")", Field::list(&arr))?;
        r.labeled("lines.splitlines()", Field::list(split::splitlines(lines)))?;

        for (i, elem) in arr.iter().enumerate() {
            r.line([Field::from(i), Field::from(*elem)])?;
        }

        r.line(Range::new(10).iter().map(Field::Int))?;

        for elem in &arr {
            r.line([Field::from(*elem)])?;
        }
        Ok(())
    }
}
