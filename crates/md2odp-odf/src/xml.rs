//! Serialization of nodes and styles to ODF XML events.
//!
//! Elements are emitted with the standard ODF prefixes (`draw:`, `text:`,
//! `presentation:`, …), which every conforming template declares on its
//! document root; the spliced markup therefore inherits the template's
//! namespace declarations.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::DocumentError;
use crate::node::{Link, List, ListItem, Node, Paragraph, Slide, Span, TextFrame};
use crate::style::StyleDefinition;

/// Write a sequence of nodes.
pub(crate) fn write_nodes<W: Write>(
    writer: &mut Writer<W>,
    nodes: &[Node],
) -> Result<(), DocumentError> {
    for node in nodes {
        write_node(writer, node)?;
    }
    Ok(())
}

/// Write a single node and its subtree.
pub(crate) fn write_node<W: Write>(
    writer: &mut Writer<W>,
    node: &Node,
) -> Result<(), DocumentError> {
    match node {
        Node::Slide(slide) => write_slide(writer, slide),
        Node::TextFrame(frame) => write_frame(writer, frame),
        Node::Paragraph(para) => write_paragraph(writer, para),
        Node::Span(span) => write_span(writer, span),
        Node::List(list) => write_list(writer, list),
        Node::ListItem(item) => write_list_item(writer, item),
        Node::LineBreak => {
            writer.write_event(Event::Empty(BytesStart::new("text:line-break")))?;
            Ok(())
        }
        Node::Link(link) => write_link(writer, link),
    }
}

fn write_slide<W: Write>(writer: &mut Writer<W>, slide: &Slide) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("draw:page");
    elem.push_attribute(("draw:name", slide.name.as_str()));
    elem.push_attribute(("draw:master-page-name", slide.master_page.as_str()));
    elem.push_attribute((
        "presentation:presentation-page-layout-name",
        slide.layout.as_str(),
    ));
    writer.write_event(Event::Start(elem))?;
    for frame in &slide.frames {
        write_frame(writer, frame)?;
    }
    writer.write_event(Event::End(BytesEnd::new("draw:page")))?;
    Ok(())
}

fn write_frame<W: Write>(writer: &mut Writer<W>, frame: &TextFrame) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("draw:frame");
    if let Some(style) = &frame.style {
        elem.push_attribute(("presentation:style-name", style.as_str()));
    }
    elem.push_attribute(("draw:layer", "layout"));
    elem.push_attribute(("svg:width", frame.size.0.as_str()));
    elem.push_attribute(("svg:height", frame.size.1.as_str()));
    elem.push_attribute(("svg:x", frame.position.0.as_str()));
    elem.push_attribute(("svg:y", frame.position.1.as_str()));
    elem.push_attribute(("presentation:class", frame.role.as_odf()));
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Start(BytesStart::new("draw:text-box")))?;
    write_nodes(writer, &frame.content)?;
    writer.write_event(Event::End(BytesEnd::new("draw:text-box")))?;
    writer.write_event(Event::End(BytesEnd::new("draw:frame")))?;
    Ok(())
}

fn write_paragraph<W: Write>(
    writer: &mut Writer<W>,
    para: &Paragraph,
) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("text:p");
    if let Some(style) = &para.style {
        elem.push_attribute(("text:style-name", style.as_str()));
    }
    writer.write_event(Event::Start(elem))?;
    write_nodes(writer, &para.children)?;
    writer.write_event(Event::End(BytesEnd::new("text:p")))?;
    Ok(())
}

fn write_span<W: Write>(writer: &mut Writer<W>, span: &Span) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("text:span");
    if let Some(style) = &span.style {
        elem.push_attribute(("text:style-name", style.as_str()));
    }
    writer.write_event(Event::Start(elem))?;
    if !span.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&span.text)))?;
    }
    write_nodes(writer, &span.children)?;
    writer.write_event(Event::End(BytesEnd::new("text:span")))?;
    Ok(())
}

fn write_list<W: Write>(writer: &mut Writer<W>, list: &List) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("text:list");
    elem.push_attribute(("text:style-name", list.style.as_str()));
    writer.write_event(Event::Start(elem))?;
    write_nodes(writer, &list.items)?;
    writer.write_event(Event::End(BytesEnd::new("text:list")))?;
    Ok(())
}

fn write_list_item<W: Write>(
    writer: &mut Writer<W>,
    item: &ListItem,
) -> Result<(), DocumentError> {
    writer.write_event(Event::Start(BytesStart::new("text:list-item")))?;
    write_nodes(writer, &item.content)?;
    writer.write_event(Event::End(BytesEnd::new("text:list-item")))?;
    Ok(())
}

fn write_link<W: Write>(writer: &mut Writer<W>, link: &Link) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("text:a");
    elem.push_attribute(("xlink:type", "simple"));
    elem.push_attribute(("xlink:href", link.href.as_str()));
    if let Some(title) = &link.title {
        elem.push_attribute(("office:title", title.as_str()));
    }
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(&link.text)))?;
    writer.write_event(Event::End(BytesEnd::new("text:a")))?;
    Ok(())
}

/// Write one automatic style definition.
pub(crate) fn write_style<W: Write>(
    writer: &mut Writer<W>,
    style: &StyleDefinition,
) -> Result<(), DocumentError> {
    let mut elem = BytesStart::new("style:style");
    elem.push_attribute(("style:name", style.name.as_str()));
    elem.push_attribute(("style:family", style.family.as_odf()));
    if style.areas.is_empty() {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }
    writer.write_event(Event::Start(elem))?;
    for (area, properties) in &style.areas {
        let mut props = BytesStart::new(area.element_name());
        for (key, value) in properties {
            props.push_attribute((key.as_str(), value.as_str()));
        }
        writer.write_event(Event::Empty(props))?;
    }
    writer.write_event(Event::End(BytesEnd::new("style:style")))?;
    Ok(())
}
