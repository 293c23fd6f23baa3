use std::fs;
use std::path::Path;
use std::rc::Rc;

use rand::Rng;

use crate::environment::Environment;
use crate::error::{Error, FatalError, RuntimeError};
use crate::lexer::Lexer;
use crate::output::Output;
use crate::token::{Kind, Token};
use crate::value::Value;

/// Where the interpreter pulls its tokens from: the lexer for top-level
/// source, or a captured buffer when a loop body is replayed.
enum TokenSource {
    Source(Lexer),
    Replay(Replay),
}

impl TokenSource {
    fn next_token(&mut self) -> Token {
        match self {
            TokenSource::Source(lexer) => lexer.next_token(),
            TokenSource::Replay(replay) => replay.next_token(),
        }
    }
}

struct Replay {
    tokens: Rc<[Token]>,
    position: usize,
}

impl Replay {
    fn new(tokens: Rc<[Token]>) -> Self {
        Self { tokens, position: 0 }
    }

    fn next_token(&mut self) -> Token {
        if let Some(token) = self.tokens.get(self.position) {
            self.position += 1;
            return token.clone();
        }
        // the capture always ends with an end-of-input marker
        match self.tokens.last() {
            Some(token) => token.clone(),
            None => Token::eof(0, 0),
        }
    }
}

/// An expression either yields a value, fails in a way the statement
/// can absorb, or fails in a way that must stop the program.
enum EvalError {
    Runtime(RuntimeError),
    Fatal(FatalError),
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        EvalError::Runtime(error)
    }
}

impl From<FatalError> for EvalError {
    fn from(error: FatalError) -> Self {
        EvalError::Fatal(error)
    }
}

/// Executes statements straight off the token stream, one lookahead
/// token at a time. There is no syntax tree: each statement handler
/// consumes its own tokens, trailing end-of-line included.
pub struct Interpreter<'a> {
    source: TokenSource,
    current: Token,
    environment: &'a mut Environment,
    output: &'a mut Output,
}

impl<'a> Interpreter<'a> {
    pub fn new(source: &str, environment: &'a mut Environment, output: &'a mut Output) -> Self {
        Self::over(TokenSource::Source(Lexer::new(source)), environment, output)
    }

    fn over(mut source: TokenSource, environment: &'a mut Environment, output: &'a mut Output) -> Self {
        let current = source.next_token();
        Self { source, current, environment, output }
    }

    pub fn run(&mut self) -> Result<(), FatalError> {
        while self.current.kind != Kind::Eof {
            self.statement()?;
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.current = self.source.next_token();
    }

    /// Hand out the lookahead token and pull in the next one.
    fn take(&mut self) -> Token {
        std::mem::replace(&mut self.current, self.source.next_token())
    }

    fn statement(&mut self) -> Result<(), FatalError> {
        match self.current.kind {
            Kind::Eol => {
                self.advance();
                Ok(())
            }
            Kind::If => self.if_statement(),
            Kind::Print => self.print_statement(),
            Kind::For => self.for_statement(),
            Kind::Random => self.random_statement(),
            Kind::Identifier => self.identifier_statement(),
            _ => {
                let token = self.take();
                self.report(&Self::unexpected(&token));
                Ok(())
            }
        }
    }

    fn unexpected(token: &Token) -> RuntimeError {
        RuntimeError::UnexpectedToken {
            found: token.describe(),
            line: token.line,
            column: token.column,
        }
    }

    fn report(&self, error: &RuntimeError) {
        eprintln!("error: {}", error);
    }

    fn at_line_boundary(&self) -> bool {
        matches!(self.current.kind, Kind::Eol | Kind::Eof | Kind::RBrace)
    }

    /// Skip to the end of the line. A braced group opened on the line is
    /// skipped whole; a closing brace belonging to an enclosing block
    /// stops the scan like the line break does.
    fn discard_line(&mut self) {
        let mut depth = 0;
        loop {
            match self.current.kind {
                Kind::Eol | Kind::Eof => return,
                Kind::LBrace => depth += 1,
                Kind::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn end_line(&mut self) {
        if self.current.kind == Kind::Eol {
            self.advance();
        }
    }

    /// Complain about anything left on the line, then step past it and
    /// the line break.
    fn finish_line(&mut self) {
        if !self.at_line_boundary() {
            self.report(&Self::unexpected(&self.current));
            self.discard_line();
        }
        self.end_line();
    }

    /// Evaluate one expression for a statement. Recoverable failures are
    /// reported here and replaced by zero so the program keeps running.
    fn line_expression(&mut self) -> Result<Value, FatalError> {
        match self.expression() {
            Ok(value) => Ok(value),
            Err(EvalError::Runtime(error)) => {
                self.report(&error);
                self.discard_line();
                Ok(Value::Number(0.0))
            }
            Err(EvalError::Fatal(error)) => Err(error),
        }
    }

    fn print_statement(&mut self) -> Result<(), FatalError> {
        self.advance();
        let value = self.line_expression()?;
        self.output.print_line(&value.to_string());
        self.finish_line();
        Ok(())
    }

    fn identifier_statement(&mut self) -> Result<(), FatalError> {
        let name = self.take();
        match self.current.kind {
            Kind::Assign => {
                self.advance();
                let value = self.line_expression()?;
                self.environment.set(&name.value, value);
                self.finish_line();
                Ok(())
            }
            Kind::PlusAssign | Kind::MinusAssign | Kind::StarAssign | Kind::SlashAssign => {
                self.compound_assignment(&name)
            }
            Kind::Increment | Kind::Decrement => self.step_statement(&name),
            // a bare literal after a name declares it: `count 5`
            Kind::Number | Kind::String => {
                let value = self.line_expression()?;
                self.environment.set(&name.value, value);
                self.finish_line();
                Ok(())
            }
            _ => {
                let token = self.take();
                self.report(&Self::unexpected(&token));
                Ok(())
            }
        }
    }

    fn compound_assignment(&mut self, name: &Token) -> Result<(), FatalError> {
        let operator = self.take();
        let target = match self.environment.get(&name.value) {
            Some(value) => value.clone(),
            None => {
                // nothing to update, so the right side is not evaluated
                self.report(&RuntimeError::UndefinedVariable {
                    name: name.value.clone(),
                    line: name.line,
                });
                self.discard_line();
                self.end_line();
                return Ok(());
            }
        };
        let operand = self.line_expression()?;
        let result = match operator.kind {
            Kind::PlusAssign => Ok(target.add(&operand)),
            Kind::MinusAssign => target.subtract(&operand, operator.line),
            Kind::StarAssign => target.multiply(&operand, operator.line),
            _ => target.divide(&operand, operator.line),
        };
        match result {
            Ok(value) => self.environment.set(&name.value, value),
            // the variable keeps its old value
            Err(error) => self.report(&error),
        }
        self.finish_line();
        Ok(())
    }

    fn step_statement(&mut self, name: &Token) -> Result<(), FatalError> {
        let operator = self.take();
        match self.environment.get(&name.value).cloned() {
            Some(Value::Number(n)) => {
                let stepped = if operator.kind == Kind::Increment { n + 1.0 } else { n - 1.0 };
                self.environment.set(&name.value, Value::Number(stepped));
            }
            Some(other) => self.report(&RuntimeError::TypeMismatch {
                operation: operator.value.clone(),
                left: other.type_name(),
                right: "number",
                line: operator.line,
            }),
            None => self.report(&RuntimeError::UndefinedVariable {
                name: name.value.clone(),
                line: name.line,
            }),
        }
        self.finish_line();
        Ok(())
    }

    fn random_statement(&mut self) -> Result<(), FatalError> {
        self.advance();
        let drawn = self.random_draw()?;
        self.output.print_line(&drawn.to_string());
        self.finish_line();
        Ok(())
    }

    /// Both bounds must be number literals, already checked before the
    /// range itself is validated. The draw is inclusive on both ends.
    fn random_draw(&mut self) -> Result<i64, FatalError> {
        let line = self.current.line;
        let min = self.random_bound()?;
        let max = self.random_bound()?;
        if min > max {
            return Err(FatalError::InvalidRandomRange { min, max, line });
        }
        Ok(rand::thread_rng().gen_range(min..=max))
    }

    fn random_bound(&mut self) -> Result<i64, FatalError> {
        if self.current.kind != Kind::Number {
            return Err(FatalError::MalformedRandomBounds {
                found: self.current.describe(),
                line: self.current.line,
                column: self.current.column,
            });
        }
        let token = self.take();
        match Self::whole_number(&token.value) {
            Some(bound) => Ok(bound),
            None => Err(FatalError::MalformedRandomBounds {
                found: token.describe(),
                line: token.line,
                column: token.column,
            }),
        }
    }

    fn for_statement(&mut self) -> Result<(), FatalError> {
        self.advance();
        let cycles = self.cycle_count()?;
        let body = self.capture_body()?;
        self.finish_line();
        for _ in 0..cycles {
            let replay = TokenSource::Replay(Replay::new(Rc::clone(&body)));
            Interpreter::over(replay, &mut *self.environment, &mut *self.output).run()?;
        }
        Ok(())
    }

    fn cycle_count(&mut self) -> Result<i64, FatalError> {
        if self.current.kind != Kind::Number {
            return Err(FatalError::NonNumericLoopCount {
                found: self.current.describe(),
                line: self.current.line,
                column: self.current.column,
            });
        }
        let token = self.take();
        match Self::whole_number(&token.value) {
            Some(count) => Ok(count),
            None => Err(FatalError::NonNumericLoopCount {
                found: token.describe(),
                line: token.line,
                column: token.column,
            }),
        }
    }

    /// Integer value of a number literal, refused once past f64's exact
    /// integer range.
    fn whole_number(text: &str) -> Option<i64> {
        const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
        let number = text.parse::<f64>().ok()?;
        if !number.is_finite() || number.abs() > EXACT_INTEGER_LIMIT {
            return None;
        }
        Some(number.trunc() as i64)
    }

    /// Buffer the loop body once so every cycle replays the same tokens.
    /// The body is a braced block, optionally preceded by a loop
    /// variable name, or a single statement running to the end of the
    /// line.
    fn capture_body(&mut self) -> Result<Rc<[Token]>, FatalError> {
        let mut tokens = Vec::new();
        match self.current.kind {
            Kind::Identifier => {
                let name = self.take();
                if self.current.kind == Kind::LBrace {
                    // the loop variable is declared but never stepped
                    self.environment.set(&name.value, Value::Number(0.0));
                    let opened = self.take();
                    self.capture_block(&mut tokens, opened.line)?;
                } else {
                    tokens.push(name);
                    self.capture_line(&mut tokens);
                }
            }
            Kind::LBrace => {
                let opened = self.take();
                self.capture_block(&mut tokens, opened.line)?;
            }
            _ => self.capture_line(&mut tokens),
        }
        tokens.push(Token::eof(self.current.line, self.current.column));
        Ok(tokens.into())
    }

    fn capture_block(&mut self, tokens: &mut Vec<Token>, opened_at: usize) -> Result<(), FatalError> {
        let mut depth = 1;
        loop {
            match self.current.kind {
                Kind::Eof => return Err(FatalError::UnterminatedBlock { line: opened_at }),
                Kind::LBrace => depth += 1,
                Kind::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return Ok(());
                    }
                }
                _ => {}
            }
            tokens.push(self.take());
        }
    }

    /// Same boundary rules as `discard_line`, buffering instead of
    /// dropping.
    fn capture_line(&mut self, tokens: &mut Vec<Token>) {
        let mut depth = 0;
        loop {
            match self.current.kind {
                Kind::Eol | Kind::Eof => return,
                Kind::LBrace => depth += 1,
                Kind::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            tokens.push(self.take());
        }
    }

    fn if_statement(&mut self) -> Result<(), FatalError> {
        self.advance();
        let mut matched = self.condition()?;
        self.branch(matched)?;
        loop {
            while self.current.kind == Kind::Eol {
                self.advance();
            }
            match self.current.kind {
                Kind::ElseIf => {
                    self.advance();
                    if matched {
                        self.skip_condition();
                        self.branch(false)?;
                    } else {
                        let taken = self.condition()?;
                        self.branch(taken)?;
                        matched = taken;
                    }
                }
                Kind::Else => {
                    let token = self.take();
                    while self.current.kind == Kind::Eol {
                        self.advance();
                    }
                    if self.current.kind != Kind::LBrace {
                        return Err(FatalError::ElseWithoutBlock {
                            line: token.line,
                            column: token.column,
                        });
                    }
                    let opened = self.take();
                    if matched {
                        self.skip_block(opened.line)?;
                    } else {
                        self.execute_block(opened.line)?;
                    }
                    break;
                }
                _ => break,
            }
        }
        Ok(())
    }

    /// Parse and evaluate `<expression> <comparison> <expression>`. Any
    /// recoverable failure makes the condition false; only malformed
    /// `random` draws inside it are fatal.
    fn condition(&mut self) -> Result<bool, FatalError> {
        match self.comparison() {
            Ok(result) => {
                if self.current.kind == Kind::Then {
                    self.advance();
                }
                Ok(result)
            }
            Err(EvalError::Runtime(error)) => {
                self.report(&error);
                self.skip_condition();
                Ok(false)
            }
            Err(EvalError::Fatal(error)) => Err(error),
        }
    }

    fn comparison(&mut self) -> Result<bool, EvalError> {
        let left = self.expression()?;
        if !self.current.is_comparison() {
            return Err(EvalError::Runtime(Self::unexpected(&self.current)));
        }
        let operator = self.take();
        let right = self.expression()?;
        Ok(left.compare(&operator.value, &right, operator.line)?)
    }

    /// Step past the remains of a condition without evaluating it.
    fn skip_condition(&mut self) {
        while !matches!(
            self.current.kind,
            Kind::Then | Kind::LBrace | Kind::Eol | Kind::Eof
        ) {
            self.advance();
        }
        if self.current.kind == Kind::Then {
            self.advance();
        }
    }

    /// Execute or skip one conditional branch: a braced block, or the
    /// remainder of the line.
    fn branch(&mut self, take: bool) -> Result<(), FatalError> {
        if self.current.kind == Kind::LBrace {
            let opened = self.take();
            if take {
                self.execute_block(opened.line)
            } else {
                self.skip_block(opened.line)
            }
        } else if take {
            self.statement()
        } else {
            self.discard_line();
            Ok(())
        }
    }

    fn execute_block(&mut self, opened_at: usize) -> Result<(), FatalError> {
        loop {
            match self.current.kind {
                Kind::RBrace => {
                    self.advance();
                    return Ok(());
                }
                Kind::Eof => return Err(FatalError::UnterminatedBlock { line: opened_at }),
                _ => self.statement()?,
            }
        }
    }

    fn skip_block(&mut self, opened_at: usize) -> Result<(), FatalError> {
        let mut depth = 1;
        while depth > 0 {
            match self.current.kind {
                Kind::LBrace => depth += 1,
                Kind::RBrace => depth -= 1,
                Kind::Eof => return Err(FatalError::UnterminatedBlock { line: opened_at }),
                _ => {}
            }
            self.advance();
        }
        Ok(())
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Value, EvalError> {
        let mut left = self.term()?;
        while self.current.kind == Kind::Operator
            && (self.current.value == "+" || self.current.value == "-")
        {
            let operator = self.take();
            let right = self.term()?;
            left = if operator.value == "+" {
                left.add(&right)
            } else {
                left.subtract(&right, operator.line)?
            };
        }
        Ok(left)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Value, EvalError> {
        let mut left = self.factor()?;
        while self.current.kind == Kind::Operator
            && (self.current.value == "*" || self.current.value == "/")
        {
            let operator = self.take();
            let right = self.factor()?;
            left = if operator.value == "*" {
                left.multiply(&right, operator.line)?
            } else {
                left.divide(&right, operator.line)?
            };
        }
        Ok(left)
    }

    // factor := number | string | identifier | 'random' bound bound | '(' expression ')'
    fn factor(&mut self) -> Result<Value, EvalError> {
        match self.current.kind {
            Kind::Number => {
                let token = self.take();
                match token.value.parse::<f64>() {
                    Ok(number) => Ok(Value::Number(number)),
                    Err(_) => Err(EvalError::Runtime(RuntimeError::InvalidNumber {
                        text: token.value.clone(),
                        line: token.line,
                    })),
                }
            }
            Kind::String => {
                let token = self.take();
                Ok(Value::String(token.string_content().to_string()))
            }
            Kind::Identifier => {
                let token = self.take();
                match self.environment.get(&token.value) {
                    Some(value) => Ok(value.clone()),
                    None => Err(EvalError::Runtime(RuntimeError::UndefinedVariable {
                        name: token.value.clone(),
                        line: token.line,
                    })),
                }
            }
            Kind::Random => {
                self.advance();
                let drawn = self.random_draw()?;
                Ok(Value::Number(drawn as f64))
            }
            Kind::LParen => {
                self.advance();
                let value = self.expression()?;
                if self.current.kind != Kind::RParen {
                    return Err(EvalError::Runtime(Self::unexpected(&self.current)));
                }
                self.advance();
                Ok(value)
            }
            _ => Err(EvalError::Runtime(Self::unexpected(&self.current))),
        }
    }
}

/// Run already-read source text against a fresh environment, writing
/// program output to `output`.
pub fn run_source(source: &str, output: &mut Output) -> Result<(), Error> {
    let mut environment = Environment::new();
    Interpreter::new(source, &mut environment, output)
        .run()
        .map_err(Error::Fatal)
}

pub fn run_file(path: &Path, output: &mut Output) -> Result<(), Error> {
    if path.extension().and_then(|extension| extension.to_str()) != Some("gum") {
        return Err(Error::NotGumSource(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    run_source(&source, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> (Environment, String) {
        let mut environment = Environment::new();
        let mut output = Output::buffer();
        Interpreter::new(source, &mut environment, &mut output)
            .run()
            .expect("program should run to completion");
        let captured = output.captured().to_string();
        (environment, captured)
    }

    fn run_fatal(source: &str) -> FatalError {
        let mut environment = Environment::new();
        let mut output = Output::buffer();
        Interpreter::new(source, &mut environment, &mut output)
            .run()
            .expect_err("program should stop with a fatal error")
    }

    #[test]
    fn assigns_variables() {
        let (environment, _) = run("x = 5");
        assert_eq!(environment.get("x"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn bare_literal_declares() {
        let (environment, _) = run("count 5\nname \"gum\"");
        assert_eq!(environment.get("count"), Some(&Value::Number(5.0)));
        assert_eq!(
            environment.get("name"),
            Some(&Value::String("gum".to_string()))
        );
    }

    #[test]
    fn compound_assignments_update_in_place() {
        let (environment, _) = run("x = 10\nx += 2\nx -= 1\nx *= 3\nx /= 11");
        assert_eq!(environment.get("x"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn compound_assignment_on_missing_variable_declares_nothing() {
        let (environment, _) = run("y += 1");
        assert!(!environment.contains("y"));
    }

    #[test]
    fn division_by_zero_keeps_the_old_value() {
        let (environment, _) = run("x = 5\nx /= 0");
        assert_eq!(environment.get("x"), Some(&Value::Number(5.0)));
    }

    #[test]
    fn failed_assignment_stores_zero() {
        let (environment, _) = run("x = missing + 1");
        assert_eq!(environment.get("x"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn increment_and_decrement_step_by_one() {
        let (environment, _) = run("n = 3\nn ++\nn ++\nn --");
        assert_eq!(environment.get("n"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn increment_of_a_string_is_rejected() {
        let (environment, _) = run("s = \"a\"\ns ++");
        assert_eq!(environment.get("s"), Some(&Value::String("a".to_string())));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let (_, output) = run("print 2 + 3 * 4");
        assert_eq!(output, "14\n");
    }

    #[test]
    fn parentheses_group() {
        let (_, output) = run("print (2 + 3) * 4");
        assert_eq!(output, "20\n");
    }

    #[test]
    fn random_with_equal_bounds_is_deterministic() {
        let (environment, _) = run("x = random 4 4");
        assert_eq!(environment.get("x"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn random_statement_prints_its_draw() {
        let (_, output) = run("random 7 7");
        assert_eq!(output, "7\n");
    }

    #[test]
    fn loop_body_replays() {
        let (environment, _) = run("x = 0\nfor 4 { x += 1 }");
        assert_eq!(environment.get("x"), Some(&Value::Number(4.0)));
    }

    #[test]
    fn loop_variable_is_declared_zero() {
        let (environment, _) = run("for 3 i { }");
        assert_eq!(environment.get("i"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn single_statement_loop_body() {
        let (environment, _) = run("x = 0\nfor 3 x += 2");
        assert_eq!(environment.get("x"), Some(&Value::Number(6.0)));
    }

    #[test]
    fn single_line_loop_body_may_contain_a_block() {
        let (_, output) = run("x = 1\nfor 2 if x == 1 { print \"y\" }");
        assert_eq!(output, "y\ny\n");
    }

    #[test]
    fn single_line_loop_inside_a_block_keeps_the_closing_brace() {
        let (_, output) = run("if 1 == 1 { for 2 print \"x\" }");
        assert_eq!(output, "x\nx\n");
    }

    #[test]
    fn skipped_single_line_branch_may_contain_a_block() {
        let (_, output) = run("if 2 < 1 if 1 == 1 { print \"n\" }\nprint \"after\"");
        assert_eq!(output, "after\n");
    }

    #[test]
    fn zero_and_negative_counts_skip_the_body() {
        let (environment, _) = run("x = 0\nfor 0 { x += 1 }");
        assert_eq!(environment.get("x"), Some(&Value::Number(0.0)));
    }

    #[test]
    fn fractional_count_truncates() {
        let (environment, _) = run("x = 0\nfor 2.9 { x += 1 }");
        assert_eq!(environment.get("x"), Some(&Value::Number(2.0)));
    }

    #[test]
    fn branches_pick_first_true_condition() {
        let source = "x = 2\nif x == 1 {\nprint \"one\"\n} else if x == 2 {\nprint \"two\"\n} else {\nprint \"other\"\n}";
        let (_, output) = run(source);
        assert_eq!(output, "two\n");
    }

    #[test]
    fn failed_condition_is_false() {
        let (_, output) = run("if missing == 1 { print \"yes\" } else { print \"no\" }");
        assert_eq!(output, "no\n");
    }

    #[test]
    fn non_numeric_loop_count_is_fatal() {
        assert!(matches!(
            run_fatal("for x { print \"hi\" }"),
            FatalError::NonNumericLoopCount { .. }
        ));
    }

    #[test]
    fn oversized_loop_count_is_fatal() {
        assert!(matches!(
            run_fatal("for 99999999999999999999999 { print \"hi\" }"),
            FatalError::NonNumericLoopCount { .. }
        ));
    }

    #[test]
    fn oversized_random_bound_is_fatal() {
        assert!(matches!(
            run_fatal("random 1 99999999999999999999999"),
            FatalError::MalformedRandomBounds { .. }
        ));
    }

    #[test]
    fn inverted_random_range_is_fatal() {
        assert!(matches!(
            run_fatal("random 9 1"),
            FatalError::InvalidRandomRange { min: 9, max: 1, .. }
        ));
    }

    #[test]
    fn else_without_block_is_fatal() {
        assert!(matches!(
            run_fatal("if 1 == 1 { } else print \"no\""),
            FatalError::ElseWithoutBlock { .. }
        ));
    }

    #[test]
    fn unterminated_block_is_fatal() {
        assert!(matches!(
            run_fatal("if 1 == 1 {\nprint \"yes\""),
            FatalError::UnterminatedBlock { line: 1 }
        ));
    }

    #[test]
    fn reads_only_gum_files() {
        let mut output = Output::buffer();
        let error = run_file(Path::new("script.txt"), &mut output)
            .expect_err("extension should be rejected");
        assert!(matches!(error, Error::NotGumSource(_)));
    }
}
