#[cfg(test)]
mod verify {
    use texdsl::building::*;
    use texdsl::language::*;

    fn trim(text: &str) -> &str {
        let head = text.trim_start_matches('\n');
        let tail = head.trim_end_matches(' ');
        tail.trim_end_matches('\n')
    }

    #[test]
    fn simple_document() {
        let result = document(|doc| doc.document_class("beamer", &[]))
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(result, "\\documentclass{beamer}\n\\begin{document}\n\\end{document}");
    }

    #[test]
    fn class_with_options() {
        let result = document(|doc| doc.document_class("beamer", &["option1", "option2"]))
            .unwrap()
            .render()
            .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass[option1,option2]{beamer}
\begin{document}
\end{document}
                "#
            )
        );
    }

    #[test]
    fn packages_in_declaration_order() {
        let result = document(|doc| {
            doc.document_class("beamer", &["option1", "option2"])?;
            doc.use_package("color", &[])?;
            doc.use_package("layaureo", &["big"])
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass[option1,option2]{beamer}
\usepackage{color}
\usepackage[big]{layaureo}
\begin{document}
\end{document}
                "#
            )
        );
    }

    #[test]
    fn text_in_body() {
        let result = document(|doc| {
            doc.document_class("beamer", &["option1", "option2"])?;
            doc.use_package("color", &[])?;
            doc.text("text1");
            Ok(())
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            "\\documentclass[option1,option2]{beamer}\n\\usepackage{color}\n\\begin{document}\n  text1\n\\end{document}"
        );
    }

    #[test]
    fn class_declared_after_packages_still_renders_first() {
        let result = document(|doc| {
            doc.use_package("color", &[])?;
            doc.document_class("article", &[])?;
            doc.text("body");
            Ok(())
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass{article}
\usepackage{color}
\begin{document}
  body
\end{document}
                "#
            )
        );
    }

    #[test]
    fn items_with_labels() {
        let result = document(|doc| {
            doc.document_class("beamer", &["option1", "option2"])?;
            doc.itemize(&[], |list| {
                list.item(Some("1"), |item| {
                    item.text("i1");
                    Ok(())
                })?;
                list.item(Some("2"), |item| {
                    item.text("i2");
                    Ok(())
                })
            })
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass[option1,option2]{beamer}
\begin{document}
  \begin{itemize}
    \item[1]
      i1
    \item[2]
      i2
  \end{itemize}
\end{document}
                "#
            )
        );
    }

    #[test]
    fn untitled_frame() {
        let result = document(|doc| {
            doc.document_class("beamer", &[])?;
            doc.frame(None, &["fragile"], |frame| {
                frame.text("content");
                Ok(())
            })
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass{beamer}
\begin{document}
  \begin{frame}[fragile]
    content
  \end{frame}
\end{document}
                "#
            )
        );
    }

    #[test]
    fn options_are_never_reordered() {
        let result = document(|doc| {
            doc.document_class("article", &["b", "a", "b"])?;
            doc.environment("custom", &["z", "y", "z"], |_| Ok(()))
        })
        .unwrap()
        .render()
        .unwrap();

        assert_eq!(
            result,
            trim(
                r#"
\documentclass[b,a,b]{article}
\begin{document}
  \begin{custom}[z,y,z]
  \end{custom}
\end{document}
                "#
            )
        );
    }

    #[test]
    fn indentation_is_two_spaces_per_level() {
        let result = document(|doc| {
            doc.document_class("article", &[])?;
            doc.center(|one| {
                one.text("depth 2");
                one.flush_left(|two| {
                    two.text("depth 3");
                    two.enumerate(&[], |three| {
                        three.item(None, |four| {
                            four.text("depth 5");
                            Ok(())
                        })
                    })
                })
            })
        })
        .unwrap()
        .render()
        .unwrap();

        for line in result
            .lines()
            .filter(|line| line.starts_with(' ') && line.contains("depth"))
        {
            let depth: usize = line
                .trim_start()
                .trim_start_matches("depth ")
                .parse()
                .unwrap();
            let spaces = line.len() - line.trim_start().len();
            assert_eq!(spaces, 2 * depth, "bad indentation: {:?}", line);
        }

        assert!(result.contains("\n        \\item\n"));
    }

    #[test]
    fn missing_class() {
        let result = document(|_| Ok(()))
            .unwrap()
            .render();

        match result {
            Err(error @ DocumentError::MissingDeclaration) => {
                assert_eq!(error.to_string(), "Document class is not specified");
            }
            other => panic!("Expected MissingDeclaration, got {:?}", other),
        }
    }

    #[test]
    fn two_classes() {
        let result = document(|doc| {
            doc.document_class("1", &[])?;
            doc.document_class("2", &[])
        });

        assert!(matches!(
            result,
            Err(DocumentError::DuplicateDeclaration { name }) if name == "2"
        ));
    }

    #[test]
    fn package_inside_body() {
        for preceding in 1..4 {
            let result = document(|doc| {
                doc.document_class("1", &[])?;
                for _ in 0..preceding {
                    doc.text("text");
                }
                doc.use_package("package", &[])
            });

            assert!(matches!(
                result,
                Err(DocumentError::OrderingViolation { .. })
            ));
        }
    }

    #[test]
    fn rendering_twice_is_identical() {
        let document = document(|doc| {
            doc.document_class("beamer", &[])?;
            doc.math(|math| {
                math.text("e^{i\\pi} + 1 = 0");
                Ok(())
            })
        })
        .unwrap();

        let first = document
            .render()
            .unwrap();
        let second = document
            .render()
            .unwrap();
        assert_eq!(first, second);
    }
}
