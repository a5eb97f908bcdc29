// ABOUTME: Content table for the tana-deck application
// ABOUTME: The eighteen literal slide records of the Tana Market presentation, in order

/// Title and points of one slide.
///
/// For the cover slide the first point is the subtitle and the remaining
/// points form the byline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRecord {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

pub const SLIDE_COUNT: usize = 18;

pub static TANA_MARKET: [SlideRecord; SLIDE_COUNT] = [
    SlideRecord {
        title: "TANA MARKET",
        points: &[
            "Comprehensive E-Commerce Platform Documentation",
            "Presented by: Tana Market Team\nDate: January 2026",
        ],
    },
    SlideRecord {
        title: "Introduction",
        points: &[
            "Tana Market is a modern, full-stack e-commerce platform facilitating seamless interaction between vendors and customers.",
            "Built to address the digital gap in local retail markets by providing a robust online presence.",
            "Integrates advanced features like Role-Based Access Control (RBAC), Real-time Tracking, and Secure Digital Payments.",
        ],
    },
    SlideRecord {
        title: "Statement of the Problem",
        points: &[
            "Limited Market Reach: Local vendors struggle to reach a wider audience beyond their physical location.",
            "Inefficient Inventory Management: Manual tracking leads to stock discrepancies and operational losses.",
            "Lack of Trust: Customers often face issues with payment security and order transparency.",
            "Fragmented Processes: Disconnected systems for sales, shipping, and payments cause delays.",
        ],
    },
    SlideRecord {
        title: "General Objective",
        points: &[
            "To develop a scalable, secure, and user-friendly web-based e-commerce application that streamlines the entire online shopping lifecycle.",
            "To bridge the gap between traditional retail and digital commerce in the local market.",
            "To provide a centralized platform for managing products, orders, users, and financial transactions efficiently.",
        ],
    },
    SlideRecord {
        title: "Specific Objectives (1/2)",
        points: &[
            "Develop a responsive user interface for Customers, Managers, and Admins using React.",
            "Implement a Role-Based Access Control (RBAC) system to ensure data security and appropriate user permissions.",
            "Create a robust product management system allowing dynamic categorization, image uploads, and inventory tracking.",
            "Integrate Chapa payment gateway for secure, real-time local currency transactions.",
        ],
    },
    SlideRecord {
        title: "Specific Objectives (2/2)",
        points: &[
            "Establish an automated order tracking system with unique tracking IDs (e.g., TANA-2026-XXXX).",
            "Implement real-time dashboards for Admins to monitor sales statistics and user activities.",
            "Provide a feedback loop through a product rating and review system to enhance trust.",
            "Ensure data integrity and security through encryption and secure API authentication.",
        ],
    },
    SlideRecord {
        title: "Project Scope (In-Scope)",
        points: &[
            "User Registration & Authentication (Login/Register/Logout).",
            "Product Catalog: Search, Filter, Sort, and View Details.",
            "Shopping Cart & Checkout Process.",
            "Order Management: lifecycle from 'Pending' to 'Delivered'.",
            "Admin Dashboard: User audits, Reports, and System Settings.",
            "Manager Dashboard: Product CRUD and Order Processing.",
        ],
    },
    SlideRecord {
        title: "Scope Limitations",
        points: &[
            "Mobile App: The current phase focuses only on the Web Application (Responsive), not a native mobile app.",
            "International Shipping: Initial launch supports local logistics only (e.g., Bahir Dar).",
            "Offline Mode: The system requires an active internet connection to function.",
            "Multi-Vendor Marketplace: Currently operates as a single-store inventory model, not a multi-vendor platform.",
        ],
    },
    SlideRecord {
        title: "System Architecture",
        points: &[
            "Frontend: Single Page Application (SPA) built with React + Vite.",
            "Backend: RESTful API built with Node.js and Express.",
            "Database: MongoDB for flexible, document-oriented data storage.",
            "Deployment: Docker-ready, cloud-agnostic architecture.",
        ],
    },
    SlideRecord {
        title: "Technology Stack",
        points: &[
            "Frontend: React.js, TailwindCSS (Styling), Framer Motion (Animations), Axios (API).",
            "Backend: Node.js, Express.js, JWT (Auth), Multer (File Uploads).",
            "Database: MongoDB, Mongoose ODM.",
            "Tools: Git, Postman, VS Code, PlantUML (Documentation).",
        ],
    },
    SlideRecord {
        title: "Module: User Management",
        points: &[
            "Registration: Secure signup with email validation.",
            "Authentication: JWT (JSON Web Tokens) for session management.",
            "RBAC Implementation:",
            "   - Admin: Full system control.",
            "   - Manager: Inventory & Order focus.",
            "   - Customer: Shopping & Profile focus.",
        ],
    },
    SlideRecord {
        title: "Module: Product & Inventory",
        points: &[
            "CRUD Operations: Create, Read, Update, Delete products.",
            "Categorization: Hierarchical organization (Electronics, Fashion, etc.).",
            "Stock Control: Auto-decrement stock upon order placement.",
            "Media: Support for multiple product images.",
        ],
    },
    SlideRecord {
        title: "Module: Order Processing",
        points: &[
            "Order Creation: Validates cart items, stock availability, and prices.",
            "Unique Tracking: Generates readable IDs (TANA-YYYYMMDD-XXXX).",
            "Status Workflow: Pending -> Paid -> Approved -> Shipped -> Delivered.",
            "History: Users can view past orders and download summaries.",
        ],
    },
    SlideRecord {
        title: "Payment Integration",
        points: &[
            "Gateway: Chapa (Ethio-centric payment provider).",
            "Flow: Redirect-based secure checkout.",
            "Webhook Verification: Server-side validation of payment success to prevent fraud.",
            "Currency: Supports local currency (ETB).",
        ],
    },
    SlideRecord {
        title: "Security Strategy",
        points: &[
            "Data Encryption: BCrypt for passwords.",
            "API Security: Rate limiting, CORS configuration, and Input Validation (Express-Validator).",
            "Authorization: Middleware checks for valid Tokens and Roles before access.",
            "Audit Logs: Tracks critical actions (Logins, Deletions) for accountability.",
        ],
    },
    SlideRecord {
        title: "Database & Persistence",
        points: &[
            "Collections: Users, Products, Orders, Notifications, Comments.",
            "Relationships: Referenced via MongoDB ObjectIds (e.g., Order belongs to User).",
            "Indexes: Optimized for search performance (Product Name, Category).",
            "Scalability: Schema-less design allows easy future attribute additions.",
        ],
    },
    SlideRecord {
        title: "Challenges & Solutions",
        points: &[
            "Challenge: Handling concurrent orders for low-stock items.",
            "Solution: Mongoose transactions and atomic updates.",
            "Challenge: Ensuring secure payments without PCI-DSS overhead.",
            "Solution: Offloading sensitive card data handling to Chapa's secure pages.",
        ],
    },
    SlideRecord {
        title: "Conclusion & Future Work",
        points: &[
            "The project successfully met the core objectives of creating a functional e-commerce platform.",
            "Provides a solid foundation for local businesses to digitize.",
            "Future Enhancements:",
            "   - AI-based Product Recommendations.",
            "   - Native Mobile Applications (iOS/Android).",
            "   - Advanced Analytics & Forecasting.",
        ],
    },
];
