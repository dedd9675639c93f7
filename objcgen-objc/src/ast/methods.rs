//! Method declarations and implementations.

use objcgen_codegen::{Element, ElementContainer, Error, Result};

use super::{StatementElement, TypeRef};

/// One piece of a selector, optionally carrying a parameter.
///
/// `initWithTitle:(NSString *)title` is a fragment with text `initWithTitle`,
/// parameter type `NSString *` and parameter name `title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSelectorFragment {
    text: String,
    parameter: Option<(TypeRef, String)>,
}

impl MethodSelectorFragment {
    /// A fragment without a parameter.
    pub fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameter: None,
        }
    }

    /// A fragment with a parameter.
    pub fn with_parameter(text: impl Into<String>, ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameter: Some((ty, name.into())),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for MethodSelectorFragment {
    fn label(&self) -> &'static str {
        "SelectorFragment"
    }

    fn render(&self) -> String {
        match &self.parameter {
            Some((ty, name)) => format!("{}:({}){}", self.text, ty, name),
            None => self.text.clone(),
        }
    }
}

/// A method signature, e.g. `- (void)setTitle:(NSString *)title;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclarationElement {
    class_method: bool,
    return_type: TypeRef,
    fragments: ElementContainer<MethodSelectorFragment>,
}

impl MethodDeclarationElement {
    pub fn new(
        class_method: bool,
        return_type: TypeRef,
        fragments: impl IntoIterator<Item = MethodSelectorFragment>,
    ) -> Self {
        Self {
            class_method,
            return_type,
            fragments: fragments.into_iter().collect(),
        }
    }

    /// A method whose selector is a single word, e.g. `- (void)run;`.
    pub fn unary(class_method: bool, return_type: TypeRef, name: impl Into<String>) -> Self {
        Self::new(class_method, return_type, [MethodSelectorFragment::bare(name)])
    }

    /// Build from parallel lists of selector names, parameter types and
    /// parameter names. All three must have the same length.
    pub fn from_parts(
        class_method: bool,
        return_type: TypeRef,
        names: Vec<String>,
        types: Vec<TypeRef>,
        parameters: Vec<String>,
    ) -> Result<Self> {
        if types.len() != names.len() {
            return Err(Error::mismatch("method parameter types", names.len(), types.len()));
        }
        if parameters.len() != names.len() {
            return Err(Error::mismatch(
                "method parameter names",
                names.len(),
                parameters.len(),
            ));
        }

        let fragments = names
            .into_iter()
            .zip(types)
            .zip(parameters)
            .map(|((name, ty), param)| MethodSelectorFragment::with_parameter(name, ty, param));
        Ok(Self::new(class_method, return_type, fragments))
    }

    /// Append one more selector fragment.
    pub fn fragment(mut self, fragment: MethodSelectorFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Append or prepend a selector fragment.
    pub fn add(&mut self, fragment: MethodSelectorFragment, at_front: bool) -> &mut Self {
        self.fragments.add(fragment, at_front);
        self
    }

    pub fn is_class_method(&self) -> bool {
        self.class_method
    }

    /// The selector as it would be written in `@selector(...)`.
    pub fn selector(&self) -> String {
        let mut selector = String::new();
        for fragment in &self.fragments {
            selector.push_str(fragment.text());
            if fragment.parameter.is_some() {
                selector.push(':');
            }
        }
        selector
    }
}

impl Element for MethodDeclarationElement {
    fn label(&self) -> &'static str {
        "MethodDeclaration"
    }

    fn render(&self) -> String {
        let sign = if self.class_method { "+" } else { "-" };
        format!(
            "\n{} ({}){};",
            sign,
            self.return_type,
            self.fragments.render_joined(" ")
        )
    }

    fn description(&self) -> String {
        let sign = if self.class_method { "+" } else { "-" };
        format!("{} {}{}", self.label(), sign, self.selector())
    }
}

/// A method body: the declaration line followed by `{ ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodImplementationElement {
    declaration: MethodDeclarationElement,
    statements: ElementContainer<StatementElement>,
}

impl MethodImplementationElement {
    pub fn new(declaration: MethodDeclarationElement) -> Self {
        Self {
            declaration,
            statements: ElementContainer::new(),
        }
    }

    /// Append a statement (builder style).
    pub fn statement(mut self, statement: StatementElement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Append or prepend a statement.
    pub fn add(&mut self, statement: StatementElement, at_front: bool) -> &mut Self {
        self.statements.add(statement, at_front);
        self
    }

    pub fn declaration(&self) -> &MethodDeclarationElement {
        &self.declaration
    }
}

impl Element for MethodImplementationElement {
    fn label(&self) -> &'static str {
        "MethodImplementation"
    }

    fn render(&self) -> String {
        let signature = self.declaration.render();
        let signature = signature.strip_suffix(';').unwrap_or(&signature);
        format!("{}\n{{\n{}\n}}", signature, self.statements.render())
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.declaration.selector())
    }
}

#[cfg(test)]
mod tests {
    use objcgen_codegen::IndentValue;

    use super::*;
    use crate::ast::MethodCall;

    #[test]
    fn test_unary_instance_method() {
        let method = MethodDeclarationElement::unary(false, TypeRef::void(), "run");
        assert_eq!(method.render(), "\n- (void)run;");
    }

    #[test]
    fn test_class_method_with_parameters() {
        let method = MethodDeclarationElement::from_parts(
            true,
            TypeRef::value("instancetype"),
            vec!["widgetWithTitle".into(), "count".into()],
            vec![TypeRef::pointer("NSString"), TypeRef::value("NSInteger")],
            vec!["title".into(), "count".into()],
        )
        .unwrap();
        assert_eq!(
            method.render(),
            "\n+ (instancetype)widgetWithTitle:(NSString *)title count:(NSInteger)count;"
        );
        assert_eq!(method.selector(), "widgetWithTitle:count:");
    }

    #[test]
    fn test_add_fragment_at_front() {
        let mut method = MethodDeclarationElement::new(
            false,
            TypeRef::void(),
            [MethodSelectorFragment::with_parameter("count", TypeRef::value("NSInteger"), "count")],
        );
        method
            .add(
                MethodSelectorFragment::with_parameter("setTitle", TypeRef::pointer("NSString"), "title"),
                true,
            )
            .add(MethodSelectorFragment::with_parameter("animated", TypeRef::value("BOOL"), "animated"), false);
        assert_eq!(method.selector(), "setTitle:count:animated:");
        assert_eq!(
            method.render(),
            "\n- (void)setTitle:(NSString *)title count:(NSInteger)count animated:(BOOL)animated;"
        );
    }

    #[test]
    fn test_from_parts_length_mismatch_fails() {
        let result = MethodDeclarationElement::from_parts(
            true,
            TypeRef::void(),
            vec!["m1".into(), "m2".into()],
            vec![TypeRef::value("t1"), TypeRef::value("t2")],
            vec!["p1".into()],
        );
        assert_eq!(
            result.unwrap_err(),
            Error::mismatch("method parameter names", 2, 1)
        );
    }

    #[test]
    fn test_from_parts_type_mismatch_fails() {
        let result = MethodDeclarationElement::from_parts(
            false,
            TypeRef::void(),
            vec!["m1".into()],
            vec![],
            vec!["p1".into()],
        );
        assert!(matches!(result, Err(Error::StructuralMismatch { .. })));
    }

    #[test]
    fn test_mixed_fragments() {
        let method = MethodDeclarationElement::unary(false, TypeRef::pointer("NSString"), "title")
            .fragment(MethodSelectorFragment::with_parameter(
                "forState",
                TypeRef::value("NSUInteger"),
                "state",
            ));
        assert_eq!(
            method.render(),
            "\n- (NSString *)title forState:(NSUInteger)state;"
        );
    }

    #[test]
    fn test_empty_implementation() {
        let method =
            MethodImplementationElement::new(MethodDeclarationElement::unary(false, TypeRef::void(), "run"));
        assert_eq!(method.render(), "\n- (void)run\n{\n\n}");
    }

    #[test]
    fn test_implementation_with_statements() {
        let indent = IndentValue::default().forward();
        let call = MethodCall::new("self.delegate", ["widgetDidRun"], ["self"]).unwrap();
        let method =
            MethodImplementationElement::new(MethodDeclarationElement::unary(false, TypeRef::void(), "run"))
                .statement(StatementElement::call(call, indent))
                .statement(StatementElement::expression("return;", indent));
        assert_eq!(
            method.render(),
            "\n- (void)run\n{\n    [self.delegate widgetDidRun:self];\n    return;\n}"
        );
    }

    #[test]
    fn test_statement_front_insert() {
        let indent = IndentValue::default().forward();
        let mut method =
            MethodImplementationElement::new(MethodDeclarationElement::unary(false, TypeRef::void(), "run"));
        method
            .add(StatementElement::expression("b();", indent), false)
            .add(StatementElement::expression("a();", indent), true);
        assert_eq!(method.render(), "\n- (void)run\n{\n    a();\n    b();\n}");
    }
}
