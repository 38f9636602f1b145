//! Document Store
//!
//! The fixed collection of legal documents the service searches over.
//!
//! The store is compiled into the binary and never changes at runtime, so it is
//! exposed as a `'static` slice that any number of request handlers can read
//! concurrently without synchronization.

/// A single searchable document.
///
/// All fields borrow from static data; documents are created once at compile
/// time and live for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

impl Document {
    /// Length of the raw content in characters, as reported by `/docs`.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// The legal document store, in its canonical order.
///
/// Result ordering for equally scored matches follows this order.
pub static LEGAL_DOCUMENTS: &[Document] = &[
    Document {
        id: "doc_001",
        title: "Contract Law Fundamentals",
        content: concat!(
            "A contract is a legally binding agreement between two or more parties. \n",
            "        For a contract to be valid, it must contain several essential elements: offer, \n",
            "        acceptance, consideration, capacity, and lawful purpose. The offer must be clear \n",
            "        and definite, stating the terms of the agreement. Acceptance must be unconditional \n",
            "        and communicated to the offeror. Consideration refers to something of value \n",
            "        exchanged between the parties. Both parties must have the legal capacity to enter \n",
            "        into a contract, meaning they are of sound mind and legal age. Finally, the \n",
            "        contract's purpose must be lawful and not against public policy.",
        ),
    },
    Document {
        id: "doc_002",
        title: "Employment Law Guidelines",
        content: concat!(
            "Employment law governs the relationship between employers and employees. \n",
            "        Key aspects include wage and hour laws, workplace safety regulations, and \n",
            "        anti-discrimination protections. The Fair Labor Standards Act (FLSA) establishes \n",
            "        minimum wage, overtime pay, and child labor standards. Employers must provide a \n",
            "        safe working environment under OSHA regulations. Discrimination based on race, \n",
            "        color, religion, sex, national origin, age, or disability is prohibited under \n",
            "        federal law. Employees have the right to organize and engage in collective \n",
            "        bargaining. Wrongful termination occurs when an employee is fired in violation \n",
            "        of legal protections or employment contracts.",
        ),
    },
    Document {
        id: "doc_003",
        title: "Intellectual Property Rights",
        content: concat!(
            "Intellectual property (IP) refers to creations of the mind, including \n",
            "        inventions, literary and artistic works, designs, and symbols. There are four \n",
            "        main types of IP protection: patents, trademarks, copyrights, and trade secrets. \n",
            "        Patents protect inventions and grant exclusive rights for a limited period, \n",
            "        typically 20 years. Trademarks protect brand names, logos, and slogans that \n",
            "        distinguish goods or services. Copyrights protect original works of authorship, \n",
            "        including literature, music, and software, typically for the life of the author \n",
            "        plus 70 years. Trade secrets protect confidential business information that \n",
            "        provides a competitive advantage. IP infringement occurs when these rights are \n",
            "        violated without authorization.",
        ),
    },
];

#[cfg(test)]
mod tests;
