use super::{Block, ContactLine, ContactValue, LegalDocument, ListItem, Notice, Section};
use crate::utils::constants::{COMPANY_LOCATION, COMPANY_NAME, PRIVACY_EMAIL, SUPPORT_EMAIL};

pub static PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    sections: &[
        Section {
            heading: "1. Introduction",
            blocks: &[
                Block::Paragraph(
                    "Expenzez (\"we,\" \"our,\" or \"us\") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our mobile application and related services (collectively, the \"Service\").",
                ),
                Block::Paragraph(
                    "By using our Service, you agree to the collection and use of information in accordance with this policy.",
                ),
            ],
        },
        Section {
            heading: "2. Information We Collect",
            blocks: &[
                Block::Subheading("2.1 Personal Information"),
                Block::Paragraph("We may collect the following personal information:"),
                Block::List(&[
                    ListItem::plain("Name and email address"),
                    ListItem::plain("Phone number"),
                    ListItem::plain("Date of birth"),
                    ListItem::plain("Address information"),
                    ListItem::plain("Banking and financial account information (through secure third-party providers)"),
                ]),
                Block::Subheading("2.2 Financial Data"),
                Block::Paragraph("When you manually add transactions or import via CSV, we collect:"),
                Block::List(&[
                    ListItem::plain("Transaction amounts, dates, and descriptions"),
                    ListItem::plain("Transaction categories and merchant names"),
                    ListItem::plain("Account balances and spending patterns"),
                    ListItem::plain("Budget and savings goal information"),
                ]),
                Block::Subheading("2.3 Usage Information"),
                Block::Paragraph("We automatically collect:"),
                Block::List(&[
                    ListItem::plain("App usage patterns and preferences"),
                    ListItem::plain("Device information (type, operating system, unique identifiers)"),
                    ListItem::plain("Log files and crash reports"),
                    ListItem::plain("Location data (only when necessary for functionality)"),
                ]),
            ],
        },
        Section {
            heading: "3. How We Use Your Information",
            blocks: &[
                Block::Paragraph("We use your information to:"),
                Block::List(&[
                    ListItem::plain("Provide and maintain our financial management services"),
                    ListItem::plain("Process transactions and provide account information"),
                    ListItem::plain("Generate AI-powered financial insights and recommendations"),
                    ListItem::plain("Send notifications about your accounts and transactions"),
                    ListItem::plain("Improve our app functionality and user experience"),
                    ListItem::plain("Comply with legal obligations and prevent fraud"),
                    ListItem::plain("Communicate with you about updates and support"),
                ]),
            ],
        },
        Section {
            heading: "4. Data Security",
            blocks: &[
                Block::Paragraph("We implement industry-standard security measures to protect your personal information:"),
                Block::List(&[
                    ListItem::plain("End-to-end encryption for all data transmission"),
                    ListItem::plain("Secure storage with bank-grade encryption"),
                    ListItem::plain("Multi-factor authentication and biometric security"),
                    ListItem::plain("Regular security audits and compliance monitoring"),
                    ListItem::plain("Limited access controls for our staff"),
                ]),
            ],
        },
        Section {
            heading: "5. Data Sharing and Disclosure",
            blocks: &[
                Block::Paragraph(
                    "We do not sell your personal information. We may share your information only in the following circumstances:",
                ),
                Block::List(&[
                    ListItem::led(
                        "Service Providers:",
                        "With trusted third-party providers who help us operate our AI services, cloud infrastructure, and analytics",
                    ),
                    ListItem::led("Legal Requirements:", "When required by law or to protect our rights and safety"),
                    ListItem::led("Business Transfer:", "In connection with a merger, acquisition, or sale of assets"),
                    ListItem::led("Consent:", "When you explicitly consent to sharing"),
                ]),
            ],
        },
        Section {
            heading: "6. Your Rights and Choices",
            blocks: &[
                Block::Paragraph("Under UK GDPR, you have the right to:"),
                Block::List(&[
                    ListItem::plain("Access your personal data"),
                    ListItem::plain("Correct inaccurate data"),
                    ListItem::plain("Delete your personal data"),
                    ListItem::plain("Restrict processing of your data"),
                    ListItem::plain("Data portability"),
                    ListItem::plain("Object to processing"),
                    ListItem::plain("Withdraw consent at any time"),
                ]),
                Block::EmailLine {
                    text: "To exercise these rights, contact us at",
                    email: PRIVACY_EMAIL,
                },
            ],
        },
        Section {
            heading: "7. Data Retention",
            blocks: &[Block::Paragraph(
                "We retain your personal information only for as long as necessary to provide our services and comply with legal obligations. Financial data is typically retained for 7 years as required by UK financial regulations. You can request deletion of your account and data at any time.",
            )],
        },
        Section {
            heading: "8. International Transfers",
            blocks: &[Block::Paragraph(
                "Your data is processed within the UK and European Economic Area. If we need to transfer data outside these regions, we ensure appropriate safeguards are in place to protect your information.",
            )],
        },
        Section {
            heading: "9. Children's Privacy",
            blocks: &[Block::Paragraph(
                "Our Service is not intended for children under 16 years of age. We do not knowingly collect personal information from children under 16. If you become aware that a child has provided us with personal information, please contact us immediately.",
            )],
        },
        Section {
            heading: "10. Changes to This Privacy Policy",
            blocks: &[Block::Paragraph(
                "We may update our Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page and updating the \"Last updated\" date. You are advised to review this Privacy Policy periodically for any changes.",
            )],
        },
        Section {
            heading: "11. Contact Information",
            blocks: &[
                Block::Paragraph("If you have any questions about this Privacy Policy, please contact us:"),
                Block::ContactBox(&[
                    ContactLine { label: "Company:", value: ContactValue::Text(COMPANY_NAME) },
                    ContactLine { label: "Email:", value: ContactValue::Email(PRIVACY_EMAIL) },
                    ContactLine { label: "Support:", value: ContactValue::Email(SUPPORT_EMAIL) },
                    ContactLine { label: "Address:", value: ContactValue::Text(COMPANY_LOCATION) },
                ]),
            ],
        },
    ],
    notice: Notice {
        label: "Regulatory Compliance:",
        text: "Expenzez, operated by Biszaal Tech Ltd., complies with UK GDPR, the Data Protection Act 2018, and FCA regulations for financial services.",
    },
};
