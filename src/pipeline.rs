use std::path::{Path, PathBuf};

use chrono::Local;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::domain::{self, Domain};
use crate::extract::PageSource;
use crate::parser::{self, CandidateSection};
use crate::rank::{self, RankedSection, ScoredSection, CANDIDATE_POOL_SIZE, OUTPUT_SIZE};
use crate::refine::refine;
use crate::report::{CollectionInput, CollectionResult, ExtractedSection, Metadata, SubsectionAnalysis};

/// Runs classification → detection → scoring → selection → refinement for
/// one collection. Reads documents through `source`; writes nothing.
pub struct Pipeline<'a> {
    source: &'a dyn PageSource,
    parallel: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(source: &'a dyn PageSource) -> Self {
        Pipeline {
            source,
            parallel: false,
        }
    }

    /// Extract documents on the rayon pool. Discovery order is kept.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn run(&self, input: &CollectionInput, documents: &[PathBuf]) -> CollectionResult {
        let persona = &input.persona.role;
        let task = &input.job_to_be_done.task;
        info!(%persona, %task, "Analysing collection");

        let domain = domain::classify(persona, task);
        info!(%domain, "Resolved domain");

        let pool = self.ranked_pool(domain, task, documents);
        info!("Found {} potential sections", pool.len());

        let selected = rank::select(pool, CANDIDATE_POOL_SIZE, OUTPUT_SIZE);
        for r in &selected {
            let s = &r.scored.section;
            info!(
                "Selected: {} -> {} (page {}, score: {:.1})",
                s.title, s.document, s.page_number, r.scored.score
            );
        }

        assemble(input, domain, &selected)
    }

    /// Every candidate of the collection, scored and ranked, cut to the pool size.
    pub fn ranked_pool(&self, domain: Domain, task: &str, documents: &[PathBuf]) -> Vec<ScoredSection> {
        let candidates = self.candidates(domain, documents);
        let scored = rank::score_all(candidates, domain, task);
        rank::rank_pool(scored, CANDIDATE_POOL_SIZE)
    }

    /// Candidates in discovery order: documents as given, pages ascending,
    /// lines ascending.
    pub fn candidates(&self, domain: Domain, documents: &[PathBuf]) -> Vec<CandidateSection> {
        let per_doc: Vec<Vec<CandidateSection>> = if self.parallel {
            documents
                .par_iter()
                .map(|path| self.document_candidates(path, domain))
                .collect()
        } else {
            documents
                .iter()
                .map(|path| self.document_candidates(path, domain))
                .collect()
        };
        per_doc.into_iter().flatten().collect()
    }

    fn document_candidates(&self, path: &Path, domain: Domain) -> Vec<CandidateSection> {
        let name = document_name(path);
        info!("Processing: {}", name);

        let pages = self.source.pages(path);
        if pages.is_empty() {
            warn!("No pages extracted from {}, skipping", name);
            return Vec::new();
        }
        parser::detect_document(&name, &pages, domain)
    }
}

fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn assemble(input: &CollectionInput, domain: Domain, selected: &[RankedSection]) -> CollectionResult {
    let extracted_sections = selected
        .iter()
        .map(|r| ExtractedSection {
            document: r.scored.section.document.clone(),
            section_title: r.scored.section.title.clone(),
            importance_rank: r.rank,
            page_number: r.scored.section.page_number,
        })
        .collect::<Vec<_>>();

    let subsection_analysis = selected
        .iter()
        .map(|r| SubsectionAnalysis {
            document: r.scored.section.document.clone(),
            refined_text: refine(&r.scored.section.context),
            page_number: r.scored.section.page_number,
        })
        .collect();

    CollectionResult {
        metadata: Metadata {
            persona: input.persona.clone(),
            job_to_be_done: input.job_to_be_done.clone(),
            documents: input.documents.clone(),
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            analysis_summary: summary(extracted_sections.len(), domain),
        },
        extracted_sections,
        subsection_analysis,
    }
}

pub fn summary(count: usize, domain: Domain) -> String {
    format!(
        "Extracted {} sections using dynamic content analysis for {} domain",
        count, domain
    )
}

// ── Tests ──
