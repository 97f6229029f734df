//! End-to-end checks on the generated presentations.

use domdeck::content;
use domdeck::DeckBuilder;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// A shape pulled out of a slide part: placeholder type and flattened text.
#[derive(Debug)]
struct Shape {
    ph_type: Option<String>,
    text: String,
}

/// Parse the `p:sp` shapes out of a slide part. Paragraph boundaries are
/// reconstructed as `\n`, matching how the builder splits body text.
fn shapes_in(xml: &str) -> Vec<Shape> {
    let mut reader = Reader::from_str(xml);
    let mut shapes = Vec::new();
    let mut current: Option<Shape> = None;
    let mut saw_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event().expect("well-formed slide XML") {
            Event::Start(e) if e.name().as_ref() == b"p:sp" => {
                current = Some(Shape {
                    ph_type: None,
                    text: String::new(),
                });
                saw_paragraph = false;
            },
            Event::End(e) if e.name().as_ref() == b"p:sp" => {
                if let Some(shape) = current.take() {
                    shapes.push(shape);
                }
            },
            Event::Empty(e) if e.name().as_ref() == b"p:ph" => {
                if let Some(shape) = current.as_mut() {
                    for attr in e.attributes() {
                        let attr = attr.expect("valid attribute");
                        if attr.key.as_ref() == b"type" {
                            shape.ph_type =
                                Some(String::from_utf8(attr.value.into_owned()).unwrap());
                        }
                    }
                }
            },
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"a:p" => {
                if let Some(shape) = current.as_mut() {
                    if saw_paragraph {
                        shape.text.push('\n');
                    }
                    saw_paragraph = true;
                }
            },
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"a:t" => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(shape) = current.as_mut() {
                    shape.text.push_str(&t.unescape().unwrap());
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    shapes
}

fn open_deck(slides: &[domdeck::SlideSpec]) -> ZipArchive<Cursor<Vec<u8>>> {
    let bytes = DeckBuilder::new().to_bytes(slides).expect("deck builds");
    ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
}

fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut part = archive.by_name(name).unwrap_or_else(|_| panic!("part {name}"));
    let mut xml = String::new();
    part.read_to_string(&mut xml).expect("utf-8 part");
    xml
}

#[test]
fn both_decks_have_eleven_slides() {
    for slides in [content::PROJETO, content::ESTRATEGICA] {
        let mut archive = open_deck(slides);
        for n in 1..=11 {
            assert!(archive.by_name(&format!("ppt/slides/slide{n}.xml")).is_ok());
        }
        assert!(archive.by_name("ppt/slides/slide12.xml").is_err());

        let pres = read_part(&mut archive, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(pres.contains(r#"<p:sldId id="266" r:id="rId12"/>"#));
    }
}

#[test]
fn projeto_slide_two_is_introducao() {
    let mut archive = open_deck(content::PROJETO);
    let xml = read_part(&mut archive, "ppt/slides/slide2.xml");
    let shapes = shapes_in(&xml);

    let title = shapes
        .iter()
        .find(|s| s.ph_type.as_deref() == Some("title"))
        .expect("title shape");
    assert_eq!(title.text, "Introdução");

    let body = shapes
        .iter()
        .find(|s| s.ph_type.is_none() && !s.text.is_empty())
        .expect("body shape");
    assert_eq!(
        body.text,
        "O projeto Gestão DOM foi criado para otimizar e digitalizar processos de gestão \
         de operações e pessoas, trazendo mais eficiência, controle e integração para a \
         empresa.\n\nObjetivo: Automatizar rotinas, centralizar informações e facilitar \
         o acesso aos dados."
    );
}

#[test]
fn projeto_layout_assignment() {
    let mut archive = open_deck(content::PROJETO);

    let rels1 = read_part(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
    assert!(rels1.contains("../slideLayouts/slideLayout1.xml"));

    for n in 2..=11 {
        let rels = read_part(&mut archive, &format!("ppt/slides/_rels/slide{n}.xml.rels"));
        assert!(
            rels.contains("../slideLayouts/slideLayout2.xml"),
            "slide {n} should use the content layout"
        );
    }
}

#[test]
fn projeto_title_slide_uses_centered_title() {
    let mut archive = open_deck(content::PROJETO);
    let xml = read_part(&mut archive, "ppt/slides/slide1.xml");
    let shapes = shapes_in(&xml);

    let title = shapes
        .iter()
        .find(|s| s.ph_type.as_deref() == Some("ctrTitle"))
        .expect("centered title");
    assert_eq!(title.text, "Gestão DOM");

    let subtitle = shapes
        .iter()
        .find(|s| s.ph_type.as_deref() == Some("subTitle"))
        .expect("subtitle");
    assert_eq!(
        subtitle.text,
        "Sistema de Gestão de Operações e Pessoas\nApresentação do Projeto\nSeu Nome - Junho/2024"
    );
}

#[test]
fn estrategica_slide_eight_uses_text_box() {
    let mut archive = open_deck(content::ESTRATEGICA);

    let rels = read_part(&mut archive, "ppt/slides/_rels/slide8.xml.rels");
    assert!(rels.contains("../slideLayouts/slideLayout3.xml"));

    let xml = read_part(&mut archive, "ppt/slides/slide8.xml");
    let shapes = shapes_in(&xml);

    let title = shapes
        .iter()
        .find(|s| s.ph_type.as_deref() == Some("title"))
        .expect("title shape");
    assert_eq!(title.text, "Telas do Sistema");

    // The body lives in a free text box, not a placeholder.
    let text_box = shapes
        .iter()
        .find(|s| s.ph_type.is_none() && !s.text.is_empty())
        .expect("text box shape");
    assert_eq!(
        text_box.text,
        "Insira aqui os prints das principais telas do sistema.\nSugestão: Cadastro de \
         empregado, painel administrativo, dashboard de operações.\n\nFrase de impacto: \
         'Visualize o futuro da sua operação em uma única tela.'"
    );

    assert!(xml.contains(r#"<a:off x="635000" y="1270000"/>"#));
    assert!(xml.contains(r#"<a:ext cx="10160000" cy="1270000"/>"#));
}

#[test]
fn rebuilds_are_byte_identical() {
    let builder = DeckBuilder::new();
    let first = builder.to_bytes(content::ESTRATEGICA).unwrap();
    let second = builder.to_bytes(content::ESTRATEGICA).unwrap();
    assert_eq!(first, second);
}

#[test]
fn build_writes_and_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    let builder = DeckBuilder::new();
    builder.build(&path, content::PROJETO).unwrap();
    let first = std::fs::read(&path).unwrap();
    assert!(first.starts_with(b"PK"));

    builder.build(&path, content::PROJETO).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn build_failure_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    // Parent of the target is a regular file, so the write must fail.
    let path = blocker.join("deck.pptx");
    let err = DeckBuilder::new().build(&path, content::PROJETO);
    assert!(err.is_err());
    assert!(!path.exists());
}
