/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don't cleanly fit into
/// "decl", "expr", or "types" (identifier lists and string literals).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, CompileError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(CompileError::syntax(
                format!("Expected identifier, found {:?}", self.peek().kind),
                self.current_span(),
            )),
        }
    }

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, CompileError> {
        let span = self.current_span();
        let name = self.identifier()?;
        Ok(Spanned::new(name, span))
    }

    fn identifier_list_spanned(&mut self) -> Result<Vec<Spanned<Ident>>, CompileError> {
        let mut idents = vec![self.identifier_spanned()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier_spanned()?);
        }
        Ok(idents)
    }

    fn string_literal(&mut self) -> Result<String, CompileError> {
        match &self.peek().kind {
            TokenKind::String(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(CompileError::syntax(
                format!("Expected string literal, found {:?}", self.peek().kind),
                self.current_span(),
            )),
        }
    }
}
