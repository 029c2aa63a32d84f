use crate::parser::{Matcher, Parser};
use crate::result::ParseResult;
use std::cell::OnceCell;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for recursive grammars, where a parser refers to itself.
///
/// The factory runs on the first parse; later parses reuse the parser it built.
pub struct Lazy<F> {
    factory: F,
    parser: OnceCell<Parser>,
}

impl<F> Lazy<F>
where
    F: Fn() -> Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }
}

impl<F> Matcher for Lazy<F>
where
    F: Fn() -> Parser,
{
    fn attempt(&self, text: &str, position: usize) -> ParseResult {
        self.parser.get_or_init(|| (self.factory)()).run(text, position)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F>(factory: F) -> Parser
where
    F: Fn() -> Parser + 'static,
{
    Parser::new(Lazy::new(factory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::chain;
    use crate::many::many;
    use crate::utf8::char;
    use std::cell::Cell;
    use std::rc::Rc;

    fn group() -> Parser {
        chain([char('('), many(lazy(group)), char(')')]).join()
    }

    #[test]
    fn test_lazy_basic() {
        let result = lazy(|| char('a')).run("aaaa", 0);
        assert!(result.is_success());
        assert_eq!(result.end(), 1);
    }

    #[test]
    fn test_lazy_recursive_grammar() {
        let result = group().run("(()(()))", 0);
        assert!(result.is_success());
        assert_eq!(result.end(), 8);
        assert_eq!(result.capture().unwrap().flatten(), "(()(()))");
    }

    #[test]
    fn test_lazy_recursive_grammar_unbalanced() {
        assert!(group().run("(()", 0).is_error());
    }

    #[test]
    fn test_lazy_builds_once() {
        let builds = Rc::new(Cell::new(0));
        let counter = builds.clone();
        let parser = lazy(move || {
            counter.set(counter.get() + 1);
            char('a')
        });

        assert_eq!(builds.get(), 0);
        parser.run("a", 0);
        parser.run("b", 0);
        assert_eq!(builds.get(), 1);
    }
}
