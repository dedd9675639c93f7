use objcgen_codegen::{IndentValue, Result};
use objcgen_core::Artifact;

use super::Parser;
use crate::{
    ObjcFile,
    ast::{
        ClassDeclarationElement, ClassImplementationElement, ForwardDeclarationElement,
        ImportElement, MemoryManagement, MethodCall, MethodDeclarationElement,
        MethodImplementationElement, PropertyElement, ProtocolElement, StatementElement, TypeRef,
    },
};

const OTHER_CLASS: &str = "OtherClass";
const CATEGORY: &str = "category";

/// Ignores its input and emits a fixed pair of files exercising every
/// element kind. Useful to eyeball the printer output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyParser {
    indent: IndentValue,
}

impl DummyParser {
    /// Method bodies are indented by `step` spaces.
    pub fn new(step: usize) -> Self {
        Self {
            indent: IndentValue::new(step),
        }
    }

    fn delegate_callback(class_name: &str) -> Result<MethodDeclarationElement> {
        MethodDeclarationElement::from_parts(
            false,
            TypeRef::void(),
            vec!["classDidRun".into()],
            vec![TypeRef::pointer(class_name)],
            vec!["sender".into()],
        )
    }
}

impl Parser for DummyParser {
    fn name(&self) -> &'static str {
        "dummy"
    }

    fn parse(&self, source: &Artifact, _content: Option<&str>) -> Result<Vec<ObjcFile>> {
        let class_name = source.stem();
        let protocol_name = format!("{}Delegate", class_name);
        let subclass_name = format!("Sub{}", class_name);
        let run = MethodDeclarationElement::unary(false, TypeRef::void(), "run");

        let mut header = ObjcFile::header(source);
        header
            .push(ImportElement::system("Foundation", "Foundation"))
            .push(ForwardDeclarationElement::class(OTHER_CLASS))
            .push(ForwardDeclarationElement::protocol(&protocol_name))
            .push(
                ClassDeclarationElement::new(&class_name)
                    .protocol("NSObject")
                    .member(PropertyElement::new(
                        "delegate",
                        TypeRef::protocol(&protocol_name),
                        MemoryManagement::Weak,
                    ))
                    .member(run.clone()),
            )
            .push(ClassDeclarationElement::new(&class_name).category(CATEGORY))
            .push(ClassDeclarationElement::new(&subclass_name).superclass(&class_name))
            .push(ProtocolElement::new(&protocol_name).member(Self::delegate_callback(&class_name)?));

        let notify = MethodCall::new("self.delegate", ["classDidRun"], ["self"])?;
        let body = self.indent.forward();

        let mut implementation = ObjcFile::implementation(source);
        implementation
            .push(ImportElement::new(&class_name))
            .push(
                ClassImplementationElement::new(&class_name).method(
                    MethodImplementationElement::new(run).statement(StatementElement::call(notify, body)),
                ),
            )
            .push(ClassImplementationElement::with_category(&class_name, CATEGORY)?)
            .push(ClassImplementationElement::new(subclass_name));

        Ok(vec![header, implementation])
    }
}

#[cfg(test)]
mod tests {
    use objcgen_codegen::Element;

    use super::*;

    fn parse(stem: &str) -> Vec<ObjcFile> {
        DummyParser::default()
            .parse(&Artifact::empty(format!("{}.txt", stem)), None)
            .unwrap()
    }

    #[test]
    fn test_ignores_content() {
        let source = Artifact::from_text("Widget.txt", "anything: at all");
        let with = DummyParser::default().parse(&source, Some("anything: at all")).unwrap();
        let without = DummyParser::default().parse(&source, None).unwrap();
        assert_eq!(with[0].render(), without[0].render());
        assert_eq!(with[1].render(), without[1].render());
    }

    #[test]
    fn test_header_outline() {
        let files = parse("Widget");
        assert_eq!(files[0].path().to_str(), Some("Widget.h"));
        assert_eq!(
            files[0].outline(),
            vec![
                "Import Foundation/Foundation.h",
                "ForwardDeclaration OtherClass",
                "ForwardDeclaration WidgetDelegate",
                "ClassDeclaration Widget@NSObject",
                "ClassDeclaration Widget(category)",
                "ClassDeclaration SubWidget@Widget",
                "Protocol WidgetDelegate",
            ]
        );
    }

    #[test]
    fn test_implementation_outline() {
        let files = parse("Widget");
        assert_eq!(files[1].path().to_str(), Some("Widget.m"));
        assert_eq!(
            files[1].outline(),
            vec![
                "Import Widget.h",
                "ClassImplementation Widget",
                "ClassImplementation Widget(category)",
                "ClassImplementation SubWidget",
            ]
        );
    }

    #[test]
    fn test_run_notifies_delegate() {
        let files = DummyParser::new(2)
            .parse(&Artifact::empty("Widget"), None)
            .unwrap();
        assert!(
            files[1]
                .render()
                .contains("- (void)run\n{\n  [self.delegate classDidRun:self];\n}")
        );
    }
}
