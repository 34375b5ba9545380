use super::{Block, ContactLine, ContactValue, LegalDocument, ListItem, Notice, Section};
use crate::utils::constants::{COMPANY_LOCATION, LEGAL_EMAIL, SUPPORT_EMAIL};

pub static TERMS_OF_SERVICE: LegalDocument = LegalDocument {
    title: "Terms of Service",
    sections: &[
        Section {
            heading: "1. Agreement to Terms",
            blocks: &[Block::Paragraph(
                "By accessing and using Expenzez (\"the App\", \"our Service\"), you agree to be bound by these Terms of Service (\"Terms\"). If you do not agree to these Terms, do not use our Service.",
            )],
        },
        Section {
            heading: "2. Description of Service",
            blocks: &[
                Block::Paragraph("Expenzez is a financial management application that provides:"),
                Block::List(&[
                    ListItem::plain("Banking integration and account management"),
                    ListItem::plain("Transaction tracking and categorization"),
                    ListItem::plain("AI-powered financial insights and recommendations"),
                    ListItem::plain("Budgeting and expense monitoring tools"),
                    ListItem::plain("Push notifications for financial activities"),
                ]),
            ],
        },
        Section {
            heading: "3. Eligibility",
            blocks: &[Block::Paragraph(
                "You must be at least 18 years old and have the legal capacity to enter into these Terms. Our Service is available to all users who want to track their expenses manually or via CSV import.",
            )],
        },
        Section {
            heading: "4. Account Registration",
            blocks: &[
                Block::Paragraph("To use our Service, you must:"),
                Block::List(&[
                    ListItem::plain("Provide accurate and complete registration information"),
                    ListItem::plain("Maintain the security of your account credentials"),
                    ListItem::plain("Promptly update any changes to your information"),
                    ListItem::plain("Be responsible for all activities under your account"),
                    ListItem::plain("Not share your account with others"),
                ]),
            ],
        },
        Section {
            heading: "5. Transaction Data",
            blocks: &[
                Block::Paragraph("Our service allows you to manage your financial data through:"),
                Block::List(&[
                    ListItem::plain("Manual entry of transactions with your own data"),
                    ListItem::plain("CSV import of transaction history from bank statements or other sources"),
                    ListItem::plain("You are responsible for the accuracy of data you input"),
                    ListItem::plain("We do not have access to your actual bank accounts or move money"),
                    ListItem::plain("You can delete your transaction data at any time"),
                ]),
            ],
        },
        Section {
            heading: "6. User Responsibilities",
            blocks: &[
                Block::Paragraph("You agree to:"),
                Block::List(&[
                    ListItem::plain("Use the Service only for lawful purposes"),
                    ListItem::plain("Not attempt to gain unauthorized access to our systems"),
                    ListItem::plain("Not reverse engineer or modify the App"),
                    ListItem::plain("Not use the Service to violate any laws or regulations"),
                    ListItem::plain("Keep your device secure and protected"),
                    ListItem::plain("Report any security issues or unauthorized access immediately"),
                ]),
            ],
        },
        Section {
            heading: "7. AI and Automated Services",
            blocks: &[Block::Paragraph(
                "Our AI-powered insights and recommendations are provided for informational purposes only. They do not constitute financial advice. You should consult with qualified financial advisors for personalized financial guidance. We are not responsible for financial decisions made based on our automated recommendations.",
            )],
        },
        Section {
            heading: "8. Privacy and Data Protection",
            blocks: &[Block::Paragraph(
                "Your privacy is important to us. Our collection and use of your personal information is governed by our Privacy Policy, which is incorporated into these Terms by reference.",
            )],
        },
        Section {
            heading: "9. Service Availability",
            blocks: &[Block::Paragraph(
                "We strive to maintain high availability but cannot guarantee uninterrupted access to our Service. We may temporarily suspend or restrict access for maintenance, updates, or security reasons. We are not liable for any loss or damage caused by service interruptions.",
            )],
        },
        Section {
            heading: "10. Intellectual Property",
            blocks: &[Block::Paragraph(
                "The Service, including all content, features, and functionality, is owned by Expenzez and protected by copyright, trademark, and other intellectual property laws. You may not copy, modify, distribute, or create derivative works without our written permission.",
            )],
        },
        Section {
            heading: "11. Limitation of Liability",
            blocks: &[Block::Paragraph(
                "TO THE MAXIMUM EXTENT PERMITTED BY LAW, EXPENZEZ SHALL NOT BE LIABLE FOR ANY INDIRECT, INCIDENTAL, SPECIAL, CONSEQUENTIAL, OR PUNITIVE DAMAGES, INCLUDING WITHOUT LIMITATION, LOSS OF PROFITS, DATA, USE, OR OTHER INTANGIBLE LOSSES, RESULTING FROM YOUR USE OF THE SERVICE.",
            )],
        },
        Section {
            heading: "12. Disclaimers",
            blocks: &[
                Block::Paragraph(
                    "THE SERVICE IS PROVIDED \"AS IS\" AND \"AS AVAILABLE\" WITHOUT WARRANTIES OF ANY KIND. WE DISCLAIM ALL WARRANTIES, EXPRESS OR IMPLIED, INCLUDING:",
                ),
                Block::List(&[
                    ListItem::plain("Warranties of merchantability and fitness for a particular purpose"),
                    ListItem::plain("Accuracy or completeness of financial data"),
                    ListItem::plain("Uninterrupted or error-free operation"),
                    ListItem::plain("Security of data transmission"),
                ]),
            ],
        },
        Section {
            heading: "13. Termination",
            blocks: &[Block::Paragraph(
                "We may terminate or suspend your account immediately, without prior notice, for any breach of these Terms. You may also terminate your account at any time by contacting us. Upon termination, your right to use the Service will cease immediately.",
            )],
        },
        Section {
            heading: "14. Changes to Terms",
            blocks: &[Block::Paragraph(
                "We reserve the right to modify these Terms at any time. We will notify you of any changes by posting the new Terms on our website and updating the \"Last updated\" date. Your continued use of the Service after changes become effective constitutes acceptance of the new Terms.",
            )],
        },
        Section {
            heading: "15. Governing Law",
            blocks: &[Block::Paragraph(
                "These Terms are governed by and construed in accordance with the laws of England and Wales. Any disputes arising from these Terms will be subject to the exclusive jurisdiction of the courts of England and Wales.",
            )],
        },
        Section {
            heading: "16. Contact Information",
            blocks: &[
                Block::Paragraph("If you have any questions about these Terms, please contact us:"),
                Block::ContactBox(&[
                    ContactLine { label: "Email:", value: ContactValue::Email(LEGAL_EMAIL) },
                    ContactLine { label: "Support:", value: ContactValue::Email(SUPPORT_EMAIL) },
                    ContactLine { label: "Address:", value: ContactValue::Text(COMPANY_LOCATION) },
                ]),
            ],
        },
    ],
    notice: Notice {
        label: "Important:",
        text: "These Terms constitute the entire agreement between you and Expenzez. If any provision is found to be unenforceable, the remaining provisions will remain in full force and effect.",
    },
};
