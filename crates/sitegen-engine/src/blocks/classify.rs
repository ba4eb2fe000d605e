use super::{
    kinds::{CodeFence, Heading, OrderedList, Quote, UnorderedList},
    types::BlockKind,
};

/// Classifies one block (as produced by `markdown_to_blocks`).
pub fn block_to_block_type(block: &str) -> BlockKind {
    let kind = classify(block);
    log::debug!("classified block as {kind:?}");
    kind
}

fn classify(block: &str) -> BlockKind {
    if let Some((level, _)) = Heading::parse(block) {
        return BlockKind::Heading(level);
    }
    if CodeFence::body(block).is_some() {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.lines().collect();
    if lines.iter().all(|line| line.starts_with(Quote::MARKER)) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| UnorderedList::item(line).is_some()) {
        return BlockKind::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| OrderedList::item(line, i + 1).is_some())
    {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}
